use std::path::PathBuf;

/// Paths the generator reads from and writes to.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Path to the source logo image.
    pub logo_path: PathBuf,
    /// Directory the icon PNGs are written into.  Created (along with any
    /// missing parents) if it does not exist; existing files with the same
    /// names are overwritten.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            logo_path: PathBuf::from("waldo_logo.png"),
            output_dir: PathBuf::from("web/icons"),
        }
    }
}
