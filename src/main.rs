use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use log::{error, info};

use bombe::analysis::{self, fitness::UnigramFitness, AnalysisRotors, SearchSpace};
use bombe::enigma::{letter_index, EnigmaKey, EnigmaMachine, Plugboard, ReflectorId, Rotor, RotorId};

#[derive(Parser)]
#[command(name = "bombe")]
#[command(about = "Crib-based recovery of three-rotor Enigma traffic")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recovers a plaintext from a ciphertext file and a file of cribs
    Crack {
        /// File holding the ciphertext
        ciphertext: PathBuf,

        /// File holding one crib per line
        cribs: PathBuf,

        /// Write the recovered plaintext here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wheel pool to draw orders from
        #[arg(long, default_value = "five")]
        rotors: String,

        /// Pin the wheel order, left to right (e.g. "I,II,III")
        #[arg(long)]
        wheel_order: Option<String>,

        /// Reflector
        #[arg(long, default_value = "B")]
        reflector: String,

        /// Pin the ring setting, left to right (e.g. "AAA")
        #[arg(long)]
        ring: Option<String>,
    },

    /// Encrypts a message under an explicit key, for producing test traffic
    Encrypt {
        /// The text to encrypt
        text: String,

        /// Wheel order, left to right (e.g. "I,II,III")
        #[arg(long, default_value = "I,II,III")]
        wheel_order: String,

        /// Ring settings, left to right (e.g. "AAA")
        #[arg(long, default_value = "AAA")]
        rings: String,

        /// Rotor offsets, left to right (e.g. "AAA")
        #[arg(long, default_value = "AAA")]
        offsets: String,

        /// Plugboard connections (e.g. "AB CD EF")
        #[arg(long)]
        plugboard: Option<String>,

        /// Reflector
        #[arg(long, default_value = "B")]
        reflector: String,
    },
}

fn handle_crack(
    ciphertext: PathBuf,
    cribs: PathBuf,
    output: Option<PathBuf>,
    rotors: String,
    wheel_order: Option<String>,
    reflector: String,
    ring: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let ciphertext = clean_text(&fs::read_to_string(ciphertext)?);
    let cribs: Vec<String> = fs::read_to_string(cribs)?
        .lines()
        .map(clean_text)
        .filter(|c| !c.is_empty())
        .collect();
    let crib_refs: Vec<&str> = cribs.iter().map(String::as_str).collect();

    let mut space = SearchSpace::full(parse_pool(&rotors)?);
    space.reflectors = vec![parse_reflector(&reflector)?];
    if let Some(order) = wheel_order {
        space.wheel_orders = vec![parse_wheel_order(&order)?];
    }
    if let Some(ring) = ring {
        // CLI triples read left to right; the search wants fastest-first.
        let [left, middle, right] = parse_triple(&ring)?;
        space.ring_settings = vec![[right, middle, left]];
    }

    info!(
        "searching {} wheel orders x {} ring settings",
        space.wheel_orders.len(),
        space.ring_settings.len()
    );

    let recovery = analysis::recover(&ciphertext, &crib_refs, &space, &UnigramFitness::new())?;

    info!("recovered {} (score {:.4})", recovery.key, recovery.score);
    match output {
        Some(path) => fs::write(path, recovery.plaintext)?,
        None => println!("{}", recovery.plaintext),
    }

    Ok(())
}

fn handle_encrypt(
    text: String,
    wheel_order: String,
    rings: String,
    offsets: String,
    plugboard: Option<String>,
    reflector: String,
) -> Result<(), Box<dyn Error>> {
    let order = parse_wheel_order(&wheel_order)?;
    let [ring_l, ring_m, ring_r] = parse_triple(&rings)?;
    let [off_l, off_m, off_r] = parse_triple(&offsets)?;
    let plugboard = parse_plugboard(plugboard.as_deref().unwrap_or(""))?;

    let key = EnigmaKey::new(
        Rotor::new(order[0], ring_l, off_l),
        Rotor::new(order[1], ring_m, off_m),
        Rotor::new(order[2], ring_r, off_r),
        parse_reflector(&reflector)?,
        plugboard,
    );
    let mut machine = EnigmaMachine::new(key)?;

    println!("{}", machine.encrypt(&clean_text(&text)));

    Ok(())
}

/// Strips everything but letters and uppercases the rest.
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn parse_pool(pool: &str) -> Result<AnalysisRotors, String> {
    match pool {
        "three" => Ok(AnalysisRotors::Three),
        "five" => Ok(AnalysisRotors::Five),
        "eight" => Ok(AnalysisRotors::Eight),
        other => Err(format!(
            "Invalid wheel pool {:?}: expected three, five, or eight",
            other
        )),
    }
}

fn parse_reflector(reflector: &str) -> Result<ReflectorId, String> {
    match reflector {
        "B" => Ok(ReflectorId::B),
        "C" => Ok(ReflectorId::C),
        other => Err(format!("Invalid reflector {:?}: expected B or C", other)),
    }
}

fn parse_wheel_order(order: &str) -> Result<[RotorId; 3], String> {
    let parts: Vec<&str> = order.split(',').collect();
    if parts.len() != 3 {
        return Err("Wheel order must name exactly 3 rotors (comma-separated)".to_string());
    }

    let mut ids = [RotorId::I; 3];
    for (slot, part) in ids.iter_mut().zip(&parts) {
        *slot = match *part {
            "I" => RotorId::I,
            "II" => RotorId::II,
            "III" => RotorId::III,
            "IV" => RotorId::IV,
            "V" => RotorId::V,
            "VI" => RotorId::VI,
            "VII" => RotorId::VII,
            "VIII" => RotorId::VIII,
            other => return Err(format!("Invalid rotor name: {:?}", other)),
        };
    }

    Ok(ids)
}

fn parse_triple(letters: &str) -> Result<[u8; 3], Box<dyn Error>> {
    let chars: Vec<char> = letters.chars().collect();
    if chars.len() != 3 {
        return Err("Letter triple must be exactly 3 characters long".into());
    }

    Ok([
        letter_index(chars[0].to_ascii_uppercase())?,
        letter_index(chars[1].to_ascii_uppercase())?,
        letter_index(chars[2].to_ascii_uppercase())?,
    ])
}

fn parse_plugboard(connections: &str) -> Result<Plugboard, Box<dyn Error>> {
    let mut pairs = Vec::new();
    for pair in connections.split_whitespace() {
        let chars: Vec<char> = pair.chars().collect();
        if chars.len() != 2 {
            return Err(format!("Invalid plugboard pair: {:?}", pair).into());
        }
        pairs.push((
            chars[0].to_ascii_uppercase(),
            chars[1].to_ascii_uppercase(),
        ));
    }
    Ok(Plugboard::new(&pairs)?)
}

fn main() {
    let cli = Cli::parse();

    let env = Env::default().filter_or("RUST_LOG", if cli.verbose { "debug" } else { "info" });
    Builder::from_env(env).init();

    let result = match cli.command {
        Commands::Crack {
            ciphertext,
            cribs,
            output,
            rotors,
            wheel_order,
            reflector,
            ring,
        } => handle_crack(ciphertext, cribs, output, rotors, wheel_order, reflector, ring),
        Commands::Encrypt {
            text,
            wheel_order,
            rings,
            offsets,
            plugboard,
            reflector,
        } => handle_encrypt(text, wheel_order, rings, offsets, plugboard, reflector),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
