//! CLI argument parsing tests.

use clap::Parser;
use punkapi::cli::{Cli, Command};
use punkapi::{Filter, OutputFormat, SearchTerms, Sink, DEFAULT_API_URL};

#[test]
fn test_cli_parses_beers_subcommand() {
    let cli = Cli::parse_from(["punk-cli", "beers"]);

    assert_eq!(cli.api_url, DEFAULT_API_URL);
    assert!(!cli.verbose);
    match cli.command {
        Command::Beers(args) => {
            assert_eq!(args.id, None);
            assert_eq!(args.output.format(), OutputFormat::Json);
            assert_eq!(args.output.sink(), Sink::Stdout);
        }
        _ => panic!("Expected Beers command"),
    }
}

#[test]
fn test_beers_short_flags() {
    let cli = Cli::parse_from(["punk-cli", "beers", "-i", "25", "-f", "csv", "-o", "out.csv"]);

    match cli.command {
        Command::Beers(args) => {
            assert_eq!(args.id, Some(25));
            assert_eq!(args.output.format(), OutputFormat::Csv);
            assert_eq!(args.output.sink(), Sink::File("out.csv".into()));
        }
        _ => panic!("Expected Beers command"),
    }
}

#[test]
fn test_beers_rejects_non_numeric_id() {
    let result = Cli::try_parse_from(["punk-cli", "beers", "--id", "buzz"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_format_is_accepted_as_json() {
    let cli = Cli::parse_from(["punk-cli", "beers", "--format", "xml"]);

    match cli.command {
        Command::Beers(args) => {
            assert_eq!(args.output.format, "xml");
            assert_eq!(args.output.format(), OutputFormat::Json);
        }
        _ => panic!("Expected Beers command"),
    }
}

#[test]
fn test_search_flags_map_to_remote_params() {
    let cli = Cli::parse_from([
        "punk-cli",
        "search",
        "-n",
        "IPA",
        "--hops",
        "Simcoe",
        "-m",
        "Extra Pale",
        "-y",
        "Wyeast 1056",
        "--min-ibu",
        "30",
        "--max-ibu",
        "70",
        "--min-abv",
        "5",
        "--max-abv",
        "8",
    ]);

    match cli.command {
        Command::Search(args) => {
            let terms = SearchTerms::from(args.filters());
            assert_eq!(terms.len(), 8);
            assert_eq!(terms.get(Filter::Name), Some("IPA"));
            assert_eq!(terms.get(Filter::Hops), Some("Simcoe"));
            assert_eq!(terms.get(Filter::Malt), Some("Extra Pale"));
            assert_eq!(terms.get(Filter::Yeast), Some("Wyeast 1056"));
            assert_eq!(terms.get(Filter::MinIbu), Some("30"));
            assert_eq!(terms.get(Filter::MaxIbu), Some("70"));
            assert_eq!(terms.get(Filter::MinAbv), Some("5"));
            assert_eq!(terms.get(Filter::MaxAbv), Some("8"));
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_search_without_flags_has_no_terms() {
    let cli = Cli::parse_from(["punk-cli", "search"]);

    match cli.command {
        Command::Search(args) => assert!(SearchTerms::from(args.filters()).is_empty()),
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_global_flags() {
    // Before subcommand
    let cli = Cli::parse_from(["punk-cli", "--api-url", "http://localhost:9000/v2", "-v", "beers"]);
    assert_eq!(cli.api_url, "http://localhost:9000/v2");
    assert!(cli.verbose);

    // After subcommand (global flag)
    let cli = Cli::parse_from(["punk-cli", "search", "--verbose"]);
    assert!(cli.verbose);
}
