use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes frames as Netpbm PAM (`P7`) with an `RGB_ALPHA` tuple type, which
/// stores the RGBA buffer byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct PamFilePresenter {}

impl FilePresenterPort for PamFilePresenter {
    fn extension(&self) -> &'static str {
        "pam"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let mut file = BufWriter::new(File::create(filepath)?);

        write_pam(&mut file, buffer)?;
        file.flush()?;

        debug!(
            "wrote {}x{} frame to {}",
            buffer.width(),
            buffer.height(),
            filepath.display()
        );

        Ok(())
    }
}

impl PamFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_pam<W: Write>(out: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    writeln!(out, "P7")?;
    writeln!(out, "WIDTH {}", buffer.width())?;
    writeln!(out, "HEIGHT {}", buffer.height())?;
    writeln!(out, "DEPTH 4")?;
    writeln!(out, "MAXVAL 255")?;
    writeln!(out, "TUPLTYPE RGB_ALPHA")?;
    writeln!(out, "ENDHDR")?;
    out.write_all(buffer.buffer())
}
