//! Library for generating web app launcher icons from a single logo image.
//!
//! A web manifest typically wants each icon in two sizes (192 and 512
//! pixels) and two flavors: a regular icon with a transparent background,
//! and a "maskable" icon with extra padding and an opaque background that
//! survives the circular or rounded-square crop some platforms apply.  See
//! https://web.dev/articles/maskable-icon for more information about
//! maskable icons.
//!
//! [`IconGenerator`] produces all four combinations from one source logo:
//!
//! ```no_run
//! use webicons::{GeneratorConfig, IconGenerator};
//!
//! let generator = IconGenerator::new(GeneratorConfig::default());
//! let report = generator.run().expect("failed to generate icons");
//! assert_eq!(report.written.len(), 8);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod variant;

pub use self::config::GeneratorConfig;
pub use self::error::Error;
pub use self::generator::{compose_icon, GenerationReport, IconGenerator};
pub use self::variant::{IconLayout, IconVariant, ICON_SIZES};
