use blueprint_cli::BlueprintCli;

fn main() -> anyhow::Result<()> {
    BlueprintCli::new().parse_and_run()
}
