//! Export helpers for rendered-frame artifacts.

pub mod frame {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    /// Metadata describing the rendered frame.
    #[derive(Debug, Clone, Serialize)]
    pub struct Metadata<'a> {
        pub scenario: &'a str,
        pub width: u32,
        pub height: u32,
        pub center_x: f64,
        pub center_y: f64,
        pub scale_px_per_m: f64,
        pub zoom: f64,
    }

    #[derive(Serialize)]
    struct CommandSidecar<'a, T: Serialize> {
        #[serde(flatten)]
        meta: &'a Metadata<'a>,
        command_count: usize,
        commands: &'a [T],
    }

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the recorded draw commands of one frame as pretty JSON.
    pub fn write_commands<T: Serialize>(
        output: &Path,
        meta: &Metadata<'_>,
        commands: &[T],
    ) -> io::Result<()> {
        let mut writer = writer_for_path(output)?;
        let sidecar = CommandSidecar {
            meta,
            command_count: commands.len(),
            commands,
        };
        to_writer_pretty(&mut writer, &sidecar)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Sidecar path next to a PNG: `frame.png` becomes `frame_commands.json`.
    pub fn sidecar_path(png: &Path) -> std::path::PathBuf {
        let parent = png.parent().unwrap_or_else(|| Path::new("."));
        let stem = png
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("frame");
        parent.join(format!("{}_commands.json", stem))
    }
}
