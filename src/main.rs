use relevance_classifier::{
    backends::ApiConfig,
    config::{DEFAULT_MODEL_ID, DEFAULT_TEXT_COLUMN},
    ClassificationJob, JobConfig, PromptTemplate,
};
use std::path::PathBuf;

// cargo run --bin classify_articles -- --input data/iex_explained.csv
// cargo run --bin classify_articles -- --input data/iex_explained.csv --offline

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let matches = clap::Command::new("classify_articles")
        .about("Labels each row of an article CSV as exam-relevant via a hosted LLM")
        .arg(
            clap::Arg::new("input")
                .help("Path to the input CSV file")
                .long("input")
                .required(true),
        )
        .arg(
            clap::Arg::new("output")
                .help("Path for the output CSV file. Defaults to <input>_classified.csv")
                .long("output")
                .required(false),
        )
        .arg(
            clap::Arg::new("text_column")
                .help("Name of the column holding the text to classify")
                .long("text-column")
                .default_value(DEFAULT_TEXT_COLUMN),
        )
        .arg(
            clap::Arg::new("prompt_template")
                .help("Path to a prompt template file with a {text} placeholder")
                .long("prompt-template")
                .required(false),
        )
        .arg(
            clap::Arg::new("model")
                .help("Model identifier passed to the inference endpoint")
                .long("model")
                .default_value(DEFAULT_MODEL_ID),
        )
        .arg(
            clap::Arg::new("base_url")
                .help("Base URL of the OpenAI-compatible inference endpoint")
                .long("base-url")
                .required(false),
        )
        .arg(
            clap::Arg::new("concurrency")
                .help("Number of in-flight requests; 1 is strictly sequential")
                .long("concurrency")
                .value_parser(clap::value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            clap::Arg::new("offline")
                .help("Use the offline keyword heuristic instead of the hosted endpoint")
                .long("offline")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input_path = PathBuf::from(matches.get_one::<String>("input").expect("required arg"));
    let output_path = match matches.get_one::<String>("output") {
        Some(output) => PathBuf::from(output),
        None => default_output_path(&input_path),
    };

    let prompt_template = match matches.get_one::<String>("prompt_template") {
        Some(path) => PromptTemplate::from_file(path)?,
        None => PromptTemplate::default(),
    };

    let mut api_config = ApiConfig::default();
    if let Some(base_url) = matches.get_one::<String>("base_url") {
        api_config = api_config.with_base_url(base_url);
    }

    let config = JobConfig::new(input_path, output_path)
        .with_text_column(matches.get_one::<String>("text_column").expect("default"))
        .with_model_id(matches.get_one::<String>("model").expect("default"))
        .with_prompt_template(prompt_template)
        .with_concurrency(*matches.get_one::<usize>("concurrency").expect("default"))
        .with_api_config(api_config);

    let job = if matches.get_flag("offline") {
        ClassificationJob::offline(config)?
    } else {
        ClassificationJob::hosted(config)?
    };

    let summary = job.run().await?;
    println!("{}", summary);
    Ok(())
}

fn default_output_path(input_path: &std::path::Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let file_name = match input_path.extension().and_then(|e| e.to_str()) {
        Some(extension) => format!("{stem}_classified.{extension}"),
        None => format!("{stem}_classified"),
    };
    input_path.with_file_name(file_name)
}
