//! Library integration tests.

use componentgen::ComponentgenError;

#[test]
fn error_types_are_public() {
    let err = ComponentgenError::UnknownCategory {
        name: "Checkbox".into(),
        known: vec!["Button".into()],
    };
    assert!(err.to_string().contains("Checkbox"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> componentgen::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use componentgen::cli::{Cli, Commands};

    let cli = Cli::parse_from(["componentgen", "list", "--json"]);
    if let Some(Commands::List(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}
