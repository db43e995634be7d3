use std::env;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const INPUT_FB2_FILE: &str = "tests/ebooks/example.fb2";
const OUTPUT_ZIP_FILE: &str = "example.fb2.zip";

/// Convenient script to pack the example fb2 file into a `.fb2.zip` archive.
fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={INPUT_FB2_FILE}");

    let out_path = PathBuf::from(env::var("OUT_DIR")?);
    let content = std::fs::read(INPUT_FB2_FILE)?;

    let mut zip = ZipWriter::new(File::create(out_path.join(OUTPUT_ZIP_FILE))?);
    zip.start_file("example.fb2", SimpleFileOptions::default())?;
    zip.write_all(&content)?;
    zip.finish()?;

    Ok(())
}
