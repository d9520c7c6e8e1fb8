//! Bounded plain-text step log
//!
//! Writes a header followed by one block per tick until `max_steps` ticks
//! have been recorded. The next tick after the bound closes the log and
//! reports completion once; every later tick is ignored. A run that stops
//! earlier closes the log through [`TickObserver::on_stop`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::simulation::engine::TickObserver;
use crate::simulation::params::Parameters;
use crate::simulation::run_state::StopReason;
use crate::simulation::states::Body;

/// Outcome of one [`StepLogger::log_tick`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Written, // snapshot appended
    Completed, // bound reached, log closed on this call
    Idle, // log already closed
}

/// Constants echoed in the log header
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogHeader {
    pub G: f64,
    pub dt: f64,
}

impl From<&Parameters> for LogHeader {
    fn from(p: &Parameters) -> Self {
        Self { G: p.G, dt: p.dt }
    }
}

pub struct StepLogger<W: Write> {
    sink: W,
    header: LogHeader,
    max_steps: usize,
    written: usize, // snapshots written so far
    logging: bool,
}

/// File sink that is created (truncated) on the first write, so a log that
/// never records a tick leaves nothing behind.
pub struct LogFile {
    path: PathBuf,
    file: Option<BufWriter<File>>,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn open(&mut self) -> io::Result<&mut BufWriter<File>> {
        let file = match self.file.take() {
            Some(f) => f,
            None => BufWriter::new(File::create(&self.path)?),
        };
        Ok(self.file.insert(file))
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl StepLogger<LogFile> {
    /// Log into the file at `path`, created on the first logged tick
    pub fn create<P: AsRef<Path>>(path: P, max_steps: usize, header: LogHeader) -> Self {
        log::info!(
            "logging first {max_steps} timesteps to {}",
            path.as_ref().display()
        );
        Self::new(LogFile::new(path), max_steps, header)
    }
}

impl<W: Write> StepLogger<W> {
    pub fn new(sink: W, max_steps: usize, header: LogHeader) -> Self {
        Self {
            sink,
            header,
            max_steps,
            written: 0,
            logging: true,
        }
    }

    pub fn is_logging(&self) -> bool {
        self.logging
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Record the state of `bodies` after tick `tick`
    pub fn log_tick(&mut self, tick: u64, bodies: &[Body]) -> Result<LogStatus> {
        if !self.logging {
            return Ok(LogStatus::Idle);
        }
        if self.written >= self.max_steps {
            self.close()?;
            log::info!("Logging completed. Saved {} timesteps.", self.max_steps);
            return Ok(LogStatus::Completed);
        }

        if self.written == 0 {
            self.write_header(bodies.len())?;
        }

        let w = &mut self.sink;
        writeln!(w, "TIMESTEP {tick}")?;
        for (i, b) in bodies.iter().enumerate() {
            writeln!(w, "  Planet {i}:")?;
            writeln!(w, "    mass: {}, radius: {}", b.m, b.radius)?;
            writeln!(w, "    pos: ({}, {}, {})", b.x.x, b.x.y, b.x.z)?;
            writeln!(w, "    vel: ({}, {}, {})", b.v.x, b.v.y, b.v.z)?;
        }
        writeln!(w)?;

        self.written += 1;
        Ok(LogStatus::Written)
    }

    /// Flush and stop logging. Safe to call more than once.
    pub fn close(&mut self) -> Result<()> {
        if self.logging {
            self.sink.flush()?;
            self.logging = false;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_header(&mut self, n_bodies: usize) -> Result<()> {
        let w = &mut self.sink;
        writeln!(w, "SIMULATION LOG")?;
        writeln!(w, "==============")?;
        writeln!(w, "Gravitational Constant: {}", self.header.G)?;
        writeln!(w, "Timestep (dt): {}", self.header.dt)?;
        writeln!(w, "Number of Planets: {n_bodies}")?;
        writeln!(w)?;
        Ok(())
    }
}

impl<W: Write> TickObserver for StepLogger<W> {
    fn on_tick(&mut self, tick: u64, bodies: &[Body]) -> Result<()> {
        self.log_tick(tick, bodies)?;
        Ok(())
    }

    fn on_stop(&mut self, tick: u64, _reason: StopReason) -> Result<()> {
        if self.logging {
            self.close()?;
            log::info!("Simulation ended at timestep {tick}");
        }
        Ok(())
    }
}
