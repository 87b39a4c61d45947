use crate::Config;
use anyhow::Result;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
enum CheckStatus {
    Ok,
    Warn,
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "\x1b[32m✓ OK\x1b[0m"),
            CheckStatus::Warn => write!(f, "\x1b[33m⚠ WARN\x1b[0m"),
            CheckStatus::Fail => write!(f, "\x1b[31m✗ FAIL\x1b[0m"),
        }
    }
}

struct CheckResult {
    name: &'static str,
    status: CheckStatus,
    detail: String,
}

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    println!("\n  pinrelay check\n");

    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            print_results(&[CheckResult {
                name: "Configuration",
                status: CheckStatus::Fail,
                detail: format!("{:#}", e),
            }]);
            anyhow::bail!("configuration is invalid");
        }
    };

    let results = check_config(&config, config_path);
    print_results(&results);

    if results.iter().any(|r| r.status == CheckStatus::Fail) {
        println!("\n  \x1b[31mSome checks failed. Fix the issues above before serving.\x1b[0m\n");
        anyhow::bail!("configuration check failed");
    }
    println!();
    Ok(())
}

fn check_config(config: &Config, config_path: Option<&Path>) -> Vec<CheckResult> {
    let mut results = Vec::new();

    results.push(CheckResult {
        name: "Configuration",
        status: CheckStatus::Ok,
        detail: match config_path {
            Some(path) => format!("Loaded from {} and environment", path.display()),
            None => "Loaded from environment".to_string(),
        },
    });

    results.push(CheckResult {
        name: "Listen address",
        status: CheckStatus::Ok,
        detail: config.bind_addr(),
    });

    results.push(match config.pinning.require_jwt() {
        Ok(jwt) => CheckResult {
            name: "Pinning token",
            status: CheckStatus::Ok,
            detail: redact(jwt),
        },
        Err(e) => CheckResult {
            name: "Pinning token",
            status: CheckStatus::Fail,
            detail: e.to_string(),
        },
    });

    let endpoint = &config.pinning.endpoint;
    results.push(CheckResult {
        name: "Pinning endpoint",
        status: if endpoint.starts_with("https://") {
            CheckStatus::Ok
        } else {
            CheckStatus::Warn
        },
        detail: endpoint.clone(),
    });

    results.push(match config.pinning.timeout_secs {
        Some(secs) => CheckResult {
            name: "Upstream timeout",
            status: CheckStatus::Ok,
            detail: format!("{}s", secs),
        },
        None => CheckResult {
            name: "Upstream timeout",
            status: CheckStatus::Warn,
            detail: "Not set; a stalled pinning call holds its request open".to_string(),
        },
    });

    results.push(CheckResult {
        name: "Client relay URL",
        status: CheckStatus::Ok,
        detail: config.client.relay_url.clone(),
    });

    results
}

/// Keep only enough of a token to recognise it.
fn redact(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}… ({} chars)", visible, secret.chars().count())
}

fn print_results(results: &[CheckResult]) {
    let max_name_len = results.iter().map(|r| r.name.len()).max().unwrap_or(20);

    for (i, result) in results.iter().enumerate() {
        println!(
            "  {:>2}. {:<width$}  {}  {}",
            i + 1,
            result.name,
            result.status,
            result.detail,
            width = max_name_len,
        );
    }
}
