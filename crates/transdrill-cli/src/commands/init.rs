//! The `transdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create transdrill.toml
    if std::path::Path::new("transdrill.toml").exists() {
        println!("transdrill.toml already exists, skipping.");
    } else {
        std::fs::write("transdrill.toml", SAMPLE_CONFIG)?;
        println!("Created transdrill.toml");
    }

    // Create example sentence bank
    let bank_path = std::path::Path::new("translations.json");
    if bank_path.exists() {
        println!("translations.json already exists, skipping.");
    } else {
        std::fs::write(bank_path, EXAMPLE_BANK)?;
        println!("Created translations.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own sentences: transdrill bank add --source \"...\" --target \"...\"");
    println!("  2. Run: transdrill validate");
    println!("  3. Run: transdrill drill");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# transdrill configuration

# Sentence bank used by `transdrill drill` and `transdrill bank`.
bank = "translations.json"

# Feedback tiers must cover every error count from 0 upwards with no gaps
# or overlaps. The last tier has no `max`.

[[tiers]]
name = "perfect"
min = 0
max = 0
messages = [
    "Flawless. Every word is right!",
    "Perfect match. Keep it up!",
    "Nothing to fix here. Impressive.",
    "Wait, all of it? Nicely done.",
]

[[tiers]]
name = "near-perfect"
min = 1
max = 1
messages = [
    "So close. Just one slip.",
    "One word away from perfect.",
    "Almost there. Did you drop a little word?",
    "A single miss. Look again carefully.",
]

[[tiers]]
name = "good"
min = 2
max = 4
messages = [
    "Good effort. A few words to polish.",
    "Nearly there. Push a little harder!",
    "Solid attempt with a couple of slips.",
    "Not bad. Check the highlighted words.",
]

[[tiers]]
name = "needs-improvement"
min = 5
max = 8
messages = [
    "Plenty of room to improve.",
    "The idea is there, the wording is not yet.",
    "Take another look at the sentence structure.",
    "Keep practising. This one needs work.",
]

[[tiers]]
name = "poor"
min = 9
max = 12
messages = [
    "Quite a few mistakes this time.",
    "Try reading the source sentence again slowly.",
    "Most of this needs rework.",
    "Let's try that one again.",
]

[[tiers]]
name = "very-poor"
min = 13
messages = [
    "That translation is far off.",
    "Start over and go word by word.",
    "Hardly anything matches. Try again.",
    "Did you answer a different sentence?",
]
"#;

const EXAMPLE_BANK: &str = r#"[
    {
        "id": 1,
        "source": "我愛你",
        "target": "I love you"
    },
    {
        "id": 2,
        "source": "今天天氣很好",
        "target": "The weather is nice today"
    },
    {
        "id": 3,
        "source": "我明天會在車站等你",
        "target": "I will wait for you at the station tomorrow"
    }
]
"#;
