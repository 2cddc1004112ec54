use linecode_codec::{CodecStrategy, Level};

fn describe(strategy: CodecStrategy) -> &'static str {
    match strategy {
        CodecStrategy::Nrz => "1 -> H, 0 -> L",
        CodecStrategy::Nrzi {
            initial: Level::Low,
        } => "1 toggles the level, 0 holds it; starts from L",
        CodecStrategy::Nrzi {
            initial: Level::High,
        } => "1 toggles the level, 0 holds it; starts from H",
        CodecStrategy::Manchester => "0 -> LH, 1 -> HL (IEEE 802.3)",
    }
}

pub fn list_schemes() {
    println!("Available line codes:");
    let mut all = CodecStrategy::ALL.to_vec();
    all.insert(
        2,
        CodecStrategy::Nrzi {
            initial: Level::High,
        },
    );
    for strategy in all {
        println!("  • {:<11} {}", strategy.to_string(), describe(strategy));
    }
}
