use lorem_gen_core::{GenerationLimits, GenerationParameters, LoremGenerator, Vocabulary};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default vocabulary, at most 10 paragraphs of at most 100 words
    let app = LoremGenerator::new(Vocabulary::default(), GenerationLimits::default());

    // Thread-local random source, content changes on every run
    let mut rng = rand::rng();

    // Defaults: one paragraph of 5 to 20 words, starting with "Lorem ipsum dolor sit amet"
    let generated = app.generate(&GenerationParameters::default(), &mut rng)?;
    println!("{}\n({} paragraph(s), {} words)\n", generated.text, generated.paragraphs, generated.total_words);

    // 15 paragraphs are requested but only 10 are generated
    let generated = app.generate(&GenerationParameters::new(15, 3, 8, false), &mut rng)?;
    println!("Requested 15 paragraphs, got {}\n", generated.paragraphs);

    // An inverted word range is rejected before anything is generated
    match app.generate(&GenerationParameters::new(1, 20, 5, true), &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}\n"),
    }

    // A seeded source always produces the same text
    let first = app.generate_text(2, 4, 6, true, &mut StdRng::seed_from_u64(2024));
    let second = app.generate_text(2, 4, 6, true, &mut StdRng::seed_from_u64(2024));
    assert_eq!(first, second);
    println!("Seeded output:\n{first}\n");

    // A custom vocabulary
    let custom = LoremGenerator::new(Vocabulary::new(["foo", "bar", "baz"])?, GenerationLimits::new(3, 10)?);
    for i in 0..3 {
        println!("Custom paragraph {}: {}", i + 1, custom.generate_paragraph(3, 10, false, &mut rng));
    }

    Ok(())
}
