use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use image::{ImageFormat, ImageReader, RgbaImage};
use tempfile::{Builder, NamedTempFile};

use crate::debug;
use crate::image::checkerboard::classify::apply_checkerboard_mask;
use crate::image::checkerboard::error::FilterError;

/// Outcome of one in-memory filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    pub width: u32,
    pub height: u32,
    /// Pixels rewritten to transparent white.
    pub modified: usize,
}

impl FilterReport {
    pub fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Remove checkerboard background from an image file and write PNG output.
///
/// The PNG is encoded into a temporary file beside `output` and renamed over
/// it once complete, so a failed run never leaves a truncated file behind.
/// Returns the number of pixels made transparent.
pub fn remove_checkerboard(input: &Path, output: &Path) -> Result<usize, FilterError> {
    let mut img = load_rgba(input)?;
    let report = process_image(&mut img);
    write_png_atomic(&img, output)?;
    Ok(report.modified)
}

/// Decode and classify without writing anything.
pub fn count_checkerboard(input: &Path) -> Result<FilterReport, FilterError> {
    let mut img = load_rgba(input)?;
    Ok(process_image(&mut img))
}

/// Rewrite checkerboard pixels of `img` in place.
pub fn process_image(img: &mut RgbaImage) -> FilterReport {
    let (width, height) = img.dimensions();
    let started = Instant::now();
    let modified = apply_checkerboard_mask(img);
    debug!("nobg"; "classified {}x{} in {:.2?}", width, height, started.elapsed());

    FilterReport {
        width,
        height,
        modified,
    }
}

fn load_rgba(input: &Path) -> Result<RgbaImage, FilterError> {
    let img = ImageReader::open(input)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| FilterError::decode(input, e.into()))?
        .decode()
        .map_err(|e| FilterError::decode(input, e))?;
    Ok(img.into_rgba8())
}

fn write_png_atomic(img: &RgbaImage, output: &Path) -> Result<(), FilterError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = create_temp_beside(dir, output).map_err(|e| FilterError::encode(output, e))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        img.write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| FilterError::encode(output, e))?;
        writer.flush().map_err(|e| FilterError::encode(output, e))?;
    }

    tmp.persist(output)
        .map_err(|e| FilterError::encode(output, e.error))?;
    Ok(())
}

/// Temp file in `dir` whose mode matches what a plain create of `output` would get.
///
/// An existing destination keeps its permissions; a new one gets 0o666
/// filtered through the process umask.
fn create_temp_beside(dir: &Path, output: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".nobg-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    if let Ok(meta) = fs::metadata(output)
        && meta.is_file()
    {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}
