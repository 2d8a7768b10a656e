#[tokio::main]
async fn main() {
    issue_import::logging::init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = issue_import::run::run(args, None, |key| std::env::var(key).ok()).await {
        let _ = issue_import::output::eprintln(&format!("{err:#}"), &mut None);
        std::process::exit(1);
    }
}
