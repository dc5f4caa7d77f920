use image::Rgba;

/// The square icon sizes, in pixels, generated for the web manifest.
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// Variants of launcher icon that can be generated from a source logo.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IconVariant {
    /// Logo on a transparent canvas with a 10% border on each side.
    Regular,
    /// Logo on an opaque white canvas with a 20% border on each side, so
    /// that the icon stays legible when the host platform crops it to a
    /// circle or rounded square.
    Maskable,
}

impl IconVariant {
    /// Both variants, in the order they are generated for each size.
    pub const ALL: [IconVariant; 2] =
        [IconVariant::Regular, IconVariant::Maskable];

    /// Returns the fraction of the canvas side length reserved as empty
    /// border on each side before placing the logo.
    pub fn padding_ratio(self) -> f64 {
        match self {
            IconVariant::Regular => 0.1,
            IconVariant::Maskable => 0.2,
        }
    }

    /// Returns the color the canvas is filled with before the logo is
    /// composited onto it.
    pub fn background(self) -> Rgba<u8> {
        match self {
            IconVariant::Regular => Rgba([255, 255, 255, 0]),
            IconVariant::Maskable => Rgba([255, 255, 255, 255]),
        }
    }

    /// Returns the output file name for this variant at the given size.
    ///
    /// # Examples
    /// ```
    /// use webicons::IconVariant;
    /// assert_eq!(IconVariant::Regular.file_name(192), "Icon-192.png");
    /// assert_eq!(IconVariant::Maskable.file_name(512),
    ///            "Icon-maskable-512.png");
    /// ```
    pub fn file_name(self, size: u32) -> String {
        match self {
            IconVariant::Regular => format!("Icon-{}.png", size),
            IconVariant::Maskable => format!("Icon-maskable-{}.png", size),
        }
    }

    /// Computes the placement of the logo on a square canvas of the given
    /// side length: the padding is the canvas size times the padding ratio,
    /// rounded down, and the logo fills whatever remains.
    ///
    /// # Examples
    /// ```
    /// use webicons::IconVariant;
    /// let layout = IconVariant::Regular.layout(192);
    /// assert_eq!(layout.padding, 19);
    /// assert_eq!(layout.logo_size, 154);
    /// let layout = IconVariant::Maskable.layout(512);
    /// assert_eq!(layout.padding, 102);
    /// assert_eq!(layout.logo_size, 308);
    /// ```
    pub fn layout(self, size: u32) -> IconLayout {
        let padding = (f64::from(size) * self.padding_ratio()).floor() as u32;
        IconLayout {
            padding,
            logo_size: size - 2 * padding,
        }
    }
}

/// Placement of the resized logo within a square icon canvas.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IconLayout {
    /// Width of the empty border on each side of the logo, in pixels.
    pub padding: u32,
    /// Side length of the resized logo, in pixels.
    pub logo_size: u32,
}
