use shopping_cart::{Cart, ConfigError, JsonFileSource, PriceCatalogFactory};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the catalog JSON file
const CONFIG_ENV: &str = "CART_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid environment variable {name}: {source}")]
    EnvVar {
        name: String,
        #[source]
        source: std::env::VarError,
    },

    #[error("Invalid item argument '{0}', expected CODE or CODE=QUANTITY")]
    InvalidItem(String),
}

/// Parse `CODE=QUANTITY`, or a bare `CODE` meaning a quantity of one
fn parse_item(arg: &str) -> Result<(&str, i64), CliError> {
    let (code, quantity) = match arg.split_once('=') {
        Some((code, quantity)) => {
            let quantity = quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| CliError::InvalidItem(arg.to_string()))?;
            (code.trim(), quantity)
        }
        None => (arg.trim(), 1),
    };

    if code.is_empty() {
        return Err(CliError::InvalidItem(arg.to_string()));
    }
    Ok((code, quantity))
}

fn config_path() -> Result<String, CliError> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => Ok(path),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_CONFIG_PATH.to_string()),
        Err(source) => Err(CliError::EnvVar {
            name: CONFIG_ENV.to_string(),
            source,
        }),
    }
}

fn run(args: &[String]) -> Result<Vec<String>, CliError> {
    let path = config_path()?;
    tracing::info!("Loading catalog from {}", path);

    let factory = PriceCatalogFactory::from_source(JsonFileSource::new(path))?;
    checkout(&mut factory.create_cart(), args)
}

fn checkout<C: Cart>(cart: &mut C, args: &[String]) -> Result<Vec<String>, CliError> {
    for arg in args {
        let (code, quantity) = parse_item(arg)?;
        cart.add_item(code, quantity);
    }
    Ok(cart.print_receipt())
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(receipt) => {
            for line in receipt {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_with_quantity() {
        assert_eq!(parse_item("banana=2").unwrap(), ("banana", 2));
        assert_eq!(parse_item("kiwi=-1").unwrap(), ("kiwi", -1));
    }

    #[test]
    fn test_parse_item_defaults_to_one() {
        assert_eq!(parse_item("apple").unwrap(), ("apple", 1));
    }

    #[test]
    fn test_checkout_adds_every_argument() {
        let mut cart = shopping_cart::ShoppingCart::new(
            [("apple", rust_decimal::Decimal::ONE)].into_iter().collect(),
            "€",
        );
        let args = vec!["apple=2".to_string(), "pear".to_string(), "apple".to_string()];

        assert_eq!(
            checkout(&mut cart, &args).unwrap(),
            ["apple - 3 - €3.00", "pear - 1 - €0.00", "TOTAL - - - €3.00"]
        );
    }

    #[test]
    fn test_checkout_stops_on_bad_argument() {
        let mut cart = shopping_cart::ShoppingCart::new(Default::default(), "€");
        let args = vec!["apple=x".to_string()];

        assert!(matches!(checkout(&mut cart, &args), Err(CliError::InvalidItem(_))));
    }

    #[test]
    fn test_env_var_error_names_variable() {
        let err = CliError::EnvVar {
            name: CONFIG_ENV.to_string(),
            source: std::env::VarError::NotPresent,
        };
        assert!(err.to_string().starts_with("Invalid environment variable CART_CONFIG"));
    }

    #[test]
    fn test_parse_item_rejects_bad_input() {
        assert!(matches!(parse_item("apple=lots"), Err(CliError::InvalidItem(_))));
        assert!(matches!(parse_item("=3"), Err(CliError::InvalidItem(_))));
    }
}
