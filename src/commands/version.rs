use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("dirmirror version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
