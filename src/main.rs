use anyhow::Result;
use simstage::cli::App;

fn main() -> Result<()> {
    let mut app = App::from_args()?;
    let args = simstage::cli::Args::parse_args();

    app.run(args)?;

    Ok(())
}
