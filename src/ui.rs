use altpass::config::{self, ConfigFile};
use altpass::{Options, Permutations};
use anyhow::{Context, Result};
use console::Style;
use num_bigint::BigUint;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

pub const MIN_SAFE_ENTROPY: f64 = 50.0;
pub const STRONG_ENTROPY: f64 = 80.0;

const CHECK_OK: &str = "+";
const CHECK_WARN: &str = "!";

pub struct DisplayOptions {
    pub color_support: bool,
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Status symbol and label for `entropy` bits.
pub fn rate_entropy(entropy: f64) -> (&'static str, &'static str) {
    if entropy >= STRONG_ENTROPY {
        (CHECK_OK, "Strong")
    } else if entropy >= MIN_SAFE_ENTROPY {
        (CHECK_OK, "Fair")
    } else {
        (CHECK_WARN, "Weak")
    }
}

/// `31752000` becomes `31,752,000`.
pub fn format_thousands(n: &BigUint) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn switches_line(options: &Options) -> String {
    format!(
        "--length {} --memorizable {}",
        options.length, options.memorizable
    )
}

pub fn display_password(password: &Zeroizing<String>) {
    println!("{}", &**password);
}

/// Print the diagnostics for `verbosity`, the permutation count and a
/// rating of its base-2 logarithm. The rating measures an attacker who
/// knows the pattern and mode: below 50 bits is Weak, below 80 Fair.
/// The default 8-character memorizable password is about 24.9 bits.
pub fn display_permutations(permutations: &Permutations, verbosity: u8, options: &DisplayOptions) {
    for line in permutations.diagnostics(verbosity) {
        println!("{}", line);
    }

    println!(
        "{} permutations",
        format_thousands(&permutations.count())
    );

    let entropy = permutations.entropy_bits();
    let (status_icon, status_text) = rate_entropy(entropy);

    let style = if !options.color_support {
        Style::new()
    } else if entropy >= MIN_SAFE_ENTROPY {
        Style::new().green()
    } else {
        Style::new().yellow()
    };

    println!(
        "{} {} bits ({})",
        style.apply_to(format!("[{}]", status_icon)),
        style.apply_to(format!("{:.1}", entropy)),
        style.apply_to(status_text)
    );
}

/// Print the config file at `path`, or create it from `file` if missing.
pub fn show_or_create_config(path: &Path, file: &ConfigFile) -> Result<()> {
    if path.exists() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        println!("Your altpass configuration file is {}", path.display());
        print!("{}", contents);
        return Ok(());
    }

    let created = config::create(path, file)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    if created {
        println!("Created configuration file {}", path.display());
    } else {
        anyhow::bail!("Configuration file {} was not created", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rate_entropy() {
        let default = Permutations::new(&Options::default()).unwrap();
        assert_eq!(rate_entropy(default.entropy_bits()), ("!", "Weak"));

        let long = Permutations::new(&Options::new(12, false)).unwrap();
        assert_eq!(rate_entropy(long.entropy_bits()), ("+", "Fair"));

        let longer = Permutations::new(&Options::new(20, false)).unwrap();
        assert_eq!(rate_entropy(longer.entropy_bits()), ("+", "Strong"));

        assert_eq!(rate_entropy(MIN_SAFE_ENTROPY), ("+", "Fair"));
        assert_eq!(rate_entropy(STRONG_ENTROPY), ("+", "Strong"));
    }

    #[test]
    fn test_format_thousands() {
        let cases = vec![
            (0u64, "0"),
            (7, "7"),
            (999, "999"),
            (1000, "1,000"),
            (31_752_000, "31,752,000"),
            (53_572_004_640, "53,572,004,640"),
            (544_505_855_160_960, "544,505,855,160,960"),
        ];

        for (n, expected) in cases {
            assert_eq!(format_thousands(&BigUint::from(n)), expected);
        }
    }

    #[test]
    fn test_switches_line() {
        assert_eq!(
            switches_line(&Options::default()),
            "--length 8 --memorizable true"
        );
        assert_eq!(
            switches_line(&Options::new(11, false)),
            "--length 11 --memorizable false"
        );
    }

    #[test]
    fn test_create_config_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(config::CONFIG_FILE_NAME);
        let file = ConfigFile::new(&Options::default(), false);

        show_or_create_config(&path, &file).unwrap();
        assert!(path.is_file());

        show_or_create_config(&path, &file).unwrap();
        let written: ConfigFile = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, file);
    }
}
