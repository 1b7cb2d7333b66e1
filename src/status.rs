use ufmt::{uDisplay, uWrite, Formatter};

use crate::command::{Coords, MotionMode, SpeedMode};

/// Displays a real value rounded to two decimal places, like `-0.50`.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Hundredths(pub f32);

impl uDisplay for Hundredths {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let scaled = self.0 * 100.0;
        let rounded = if scaled < 0.0 {
            (scaled - 0.5) as i32
        } else {
            (scaled + 0.5) as i32
        };
        udisplay_hundredths(rounded, f)
    }
}

/// Writes a value counted in hundredths as a decimal number.
fn udisplay_hundredths<W>(
    value: i32,
    f: &mut Formatter<'_, W>,
) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    if value < 0 {
        f.write_char('-')?;
    }

    let v = value.unsigned_abs();
    let int_part = v / 100;
    let frc_part = v % 100;

    int_part.fmt(f)?;
    f.write_char('.')?;
    if frc_part < 10 {
        f.write_char('0')?;
    }
    frc_part.fmt(f)
}

/// Displays a flag as `true` or `false`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Flag(pub bool);

impl uDisplay for Flag {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(if self.0 { "true" } else { "false" })
    }
}

impl uDisplay for MotionMode {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            MotionMode::None => "G80",
            MotionMode::Rapid => "G0",
            MotionMode::Linear => "G1",
        })
    }
}

impl uDisplay for Coords {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            Coords::Absolute => "ABSOLUTE",
            Coords::Relative => "RELATIVE",
        })
    }
}

impl uDisplay for SpeedMode {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            SpeedMode::Accelerated => "ACCELERATED",
            SpeedMode::Constant => "CONSTANT",
        })
    }
}
