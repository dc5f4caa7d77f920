use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageReader, RgbaImage};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::variant::{IconVariant, ICON_SIZES};

/// Generates the fixed set of launcher icons from a single source logo.
///
/// One run produces, for each size in [`ICON_SIZES`], a regular and a
/// maskable icon, so eight PNG files in total.
pub struct IconGenerator {
    config: GeneratorConfig,
}

/// The outcome of a successful generator run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Paths of the PNG files written, in generation order.
    pub written: Vec<PathBuf>,
}

impl IconGenerator {
    /// Creates a generator that reads and writes at the configured paths.
    pub fn new(config: GeneratorConfig) -> IconGenerator {
        IconGenerator { config }
    }

    /// Runs the full generation pass: decodes the source logo once, then
    /// for each size and variant composites it onto a padded canvas and
    /// writes the PNG.  The output directory is created before the source
    /// is opened, so a missing logo still leaves the directory in place.
    ///
    /// Generation is strictly sequential; the first failure aborts the
    /// remaining icons and any files already written stay on disk.
    pub fn run(&self) -> Result<GenerationReport, Error> {
        fs::create_dir_all(&self.config.output_dir).map_err(|source| {
            Error::Io {
                path: self.config.output_dir.clone(),
                source,
            }
        })?;

        let logo = self.load_logo()?;
        log::info!("loaded {} ({}x{})",
                   self.config.logo_path.display(),
                   logo.width(),
                   logo.height());
        if logo.width() != logo.height() {
            log::warn!("source logo is {}x{}; it will be stretched to a \
                        square",
                       logo.width(),
                       logo.height());
        }

        let mut written =
            Vec::with_capacity(ICON_SIZES.len() * IconVariant::ALL.len());
        for &size in &ICON_SIZES {
            for variant in IconVariant::ALL {
                let icon = compose_icon(&logo, size, variant);
                let path = self.config.output_dir.join(variant.file_name(size));
                icon.save_with_format(&path, ImageFormat::Png).map_err(
                    |source| Error::Encode { path: path.clone(), source },
                )?;
                log::info!("wrote {}", path.display());
                written.push(path);
            }
        }
        Ok(GenerationReport { written })
    }

    /// Decodes the source logo and normalizes it to RGBA, so that sources
    /// without an alpha channel composite opaquely.
    fn load_logo(&self) -> Result<RgbaImage, Error> {
        let path = &self.config.logo_path;
        let reader = ImageReader::open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::SourceNotFound { path: path.clone() }
            } else {
                Error::Io { path: path.clone(), source }
            }
        })?;
        let image = reader.decode().map_err(|source| Error::Decode {
            path: path.clone(),
            source,
        })?;
        Ok(image.to_rgba8())
    }
}

/// Composites the logo onto a fresh canvas for one size/variant pair.
///
/// The canvas is filled with the variant background, the logo is resized to
/// the layout's square (Lanczos3, so non-square sources are stretched), and
/// the result is alpha-composited at the padding offset, with the logo's
/// own alpha channel acting as the compositing mask.
pub fn compose_icon(logo: &RgbaImage,
                    size: u32,
                    variant: IconVariant)
                    -> RgbaImage {
    let layout = variant.layout(size);
    let mut canvas = RgbaImage::from_pixel(size, size, variant.background());
    let resized = imageops::resize(logo,
                                   layout.logo_size,
                                   layout.logo_size,
                                   FilterType::Lanczos3);
    imageops::overlay(&mut canvas,
                      &resized,
                      i64::from(layout.padding),
                      i64::from(layout.padding));
    canvas
}
