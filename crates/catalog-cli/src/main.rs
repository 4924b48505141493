use catalog_cli::cli;

fn main() -> anyhow::Result<()> {
    let matches = cli::command().get_matches();
    cli::run(&matches)
}
