//! Headless prediction: encode a form file and print the outcome.

use std::path::{Path, PathBuf};

use dropout_predictor::encoding::{FormInput, encode};
use dropout_predictor::logging;
use dropout_predictor::predictor::{DEFAULT_MODEL_PATH, Predictor};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone)]
struct CliOptions {
    model_path: PathBuf,
    input_path: Option<PathBuf>,
    show_record: bool,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    if let Err(err) = logging::init_stderr() {
        eprintln!("Logging disabled: {err}");
    }

    let form = match &options.input_path {
        Some(path) => load_form(path)?,
        None => FormInput::default(),
    };
    let record = encode(&form);
    if options.show_record {
        for (name, value) in record.named_values() {
            println!("{name} = {value}");
        }
        println!();
    }

    let predictor = Predictor::new(options.model_path);
    let outcome = predictor.predict(&record).map_err(|err| err.to_string())?;
    println!("{}", outcome.message());
    Ok(())
}

fn load_form(path: &Path) -> Result<FormInput, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    let form: FormInput =
        toml::from_str(&text).map_err(|err| format!("Invalid form {}: {err}", path.display()))?;
    Ok(form.clamped())
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut model_path = PathBuf::from(DEFAULT_MODEL_PATH);
    let mut input_path: Option<PathBuf> = None;
    let mut show_record = false;

    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--model" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--model requires a value".to_string())?;
                model_path = PathBuf::from(value);
            }
            "--input" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--input requires a value".to_string())?;
                input_path = Some(PathBuf::from(value));
            }
            "--show-record" => show_record = true,
            other => return Err(format!("Unknown argument: {other}\n\n{}", help_text())),
        }
        idx += 1;
    }

    Ok(CliOptions {
        model_path,
        input_path,
        show_record,
    })
}

fn help_text() -> String {
    [
        "dropout-predict",
        "",
        "Encode an enrollment form and print the predicted outcome.",
        "",
        "Usage:",
        "  dropout-predict [--model <model.json>] [--input <form.toml>] [--show-record]",
        "",
        "Options:",
        "  --model <path>   Classifier artifact (default: model/model.json).",
        "  --input <path>   Form values as TOML; missing keys use the form defaults.",
        "  --show-record    Print the encoded feature record before the outcome.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let options = parse_args(Vec::new()).unwrap();
        assert_eq!(options.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert!(options.input_path.is_none());
        assert!(!options.show_record);
    }

    #[test]
    fn parses_all_flags() {
        let options = parse_args(args(&[
            "--model",
            "m.json",
            "--input",
            "f.toml",
            "--show-record",
        ]))
        .unwrap();
        assert_eq!(options.model_path, PathBuf::from("m.json"));
        assert_eq!(options.input_path, Some(PathBuf::from("f.toml")));
        assert!(options.show_record);
    }

    #[test]
    fn rejects_missing_values_and_unknown_flags() {
        assert!(parse_args(args(&["--model"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }
}
