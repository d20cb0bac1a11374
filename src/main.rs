mod cli;

use apk_deps::adapters::outbound::console::StderrProgressReporter;
use apk_deps::adapters::outbound::filesystem::FileSystemIndexReader;
use apk_deps::adapters::outbound::network::HttpIndexClient;
use apk_deps::adapters::outbound::RepositoryIndexFetcher;
use apk_deps::application::dto::ResolveRequest;
use apk_deps::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use apk_deps::application::use_cases::ResolveDependenciesUseCase;
use apk_deps::config::{self, AppConfig};
use apk_deps::shared::error::{ApkError, ExitCode};
use apk_deps::shared::Result;
use cli::Args;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<ApkError>()
        .map_or(ExitCode::ApplicationError, ApkError::exit_code)
}

fn run(args: Args) -> Result<()> {
    let config = config::load_app_config(&args.config)?;
    print_config(&config);

    // Create adapters (Dependency Injection)
    let index_fetcher =
        RepositoryIndexFetcher::new(HttpIndexClient::new()?, FileSystemIndexReader::new());
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ResolveDependenciesUseCase::new(index_fetcher, progress_reporter);

    let request = ResolveRequest::new(config.package_name, config.source, config.filter);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatter = FormatterFactory::create(args.format, config.ascii_tree);
    let report = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&report)?;

    Ok(())
}

fn print_config(config: &AppConfig) {
    eprintln!("⚙️  Configuration:");
    eprintln!("   package_name: {}", config.package_name);
    eprintln!("   source: {}", config.source);
    eprintln!("   ascii_tree: {}", if config.ascii_tree { "on" } else { "off" });
    eprintln!("   filter_substring: {}", config.filter);
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_application_errors() {
        let err: anyhow::Error = ApkError::ConfigError {
            details: "bad".to_string(),
        }
        .into();
        assert_eq!(exit_code_for(&err), ExitCode::ConfigurationError);

        let err: anyhow::Error = ApkError::PackageNotFound {
            package: "x".to_string(),
        }
        .into();
        assert_eq!(exit_code_for(&err), ExitCode::IndexError);
    }

    #[test]
    fn test_exit_code_for_unexpected_errors() {
        let err = anyhow::anyhow!("Failed to write to stdout");
        assert_eq!(exit_code_for(&err), ExitCode::ApplicationError);
    }
}
