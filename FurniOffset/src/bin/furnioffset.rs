fn main() -> anyhow::Result<()> {
    furnioffset::cli::run_cli()
}
