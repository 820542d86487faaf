use log::info;
use xeger_core::{Automaton, AutomatonBuilder, GenerationInput, Generator, generate_many};

/// `#[0-9a-f]{6}`
fn hex_color() -> Result<Automaton, Box<dyn std::error::Error>> {
    let mut builder = AutomatonBuilder::new();
    let start = builder.add_state(false);
    let mut previous = builder.add_state(false);
    builder.add_char_transition(start, '#', previous)?;

    for i in 0..6 {
        let next = builder.add_state(i == 5);
        builder.add_transition(previous, '0', '9', next)?;
        builder.add_transition(previous, 'a', 'f', next)?;
        previous = next;
    }

    builder.set_initial(start)?;
    Ok(builder.build()?)
}

/// `[A-Z][a-z]*( [A-Z][a-z]*)*`
fn title() -> Result<Automaton, Box<dyn std::error::Error>> {
    let mut builder = AutomatonBuilder::new();
    let start = builder.add_state(false);
    let word = builder.add_state(true);
    let space = builder.add_state(false);
    builder.add_transition(start, 'A', 'Z', word)?;
    builder.add_transition(word, 'a', 'z', word)?;
    builder.add_char_transition(word, ' ', space)?;
    builder.add_transition(space, 'A', 'Z', word)?;
    builder.set_initial(start)?;
    Ok(builder.build()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Automatons normally come from a regex compiler, saved once
    // and reloaded by every consumer
    let path = "./data/hex_color.bin";
    hex_color()?.save(path)?;
    let colors = Automaton::load(path)?;
    info!("loaded {} states from {}", colors.state_count(), path);

    // A seeded generator always yields the same sequence
    let mut generator = Generator::seeded(&colors, 1000);
    for i in 0..5 {
        println!("Generated color {}: {}", i + 1, generator.generate()?);
    }

    // Without bounds, each accepting state stops with probability 1/2,
    // so titles are mostly short
    let titles = title()?;
    let mut generator = Generator::from_entropy(&titles);
    for i in 0..5 {
        println!("Generated title {}: {}", i + 1, generator.generate()?);
    }

    // Bounds are advisory: kept for every later call
    generator.generate_bounded(Some(12), Some(20))?;
    for i in 0..5 {
        println!("Bounded title {}: {}", i + 1, generator.generate()?);
    }

    // Inverted bounds are rejected
    match generator.generate_bounded(Some(20), Some(12)) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {}", e),
    }

    // Many strings at once, spread over all cores
    let input = GenerationInput::bounded(Some(8), Some(16))?;
    let batch = generate_many(&titles, &input, 10_000, 7)?;
    println!("Batch of {} titles, first: {:?}", batch.len(), batch.first());

    Ok(())
}
