fn main() -> anyhow::Result<()> {
    texsplice::cli::run_cli()
}
