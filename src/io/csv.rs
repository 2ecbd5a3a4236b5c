use std::io::{self, Write};

use crate::dynamics::state::Sample;

/// Write a trajectory time series to CSV format.
///
/// Columns: time, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z, speed
pub fn write_trajectory<W: Write>(writer: &mut W, samples: &[Sample<6>]) -> io::Result<()> {
    writeln!(writer, "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,speed")?;

    for s in samples {
        let x = &s.state;
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.time,
            x[0], x[1], x[2],
            x[3], x[4], x[5],
            s.speed(),
        )?;
    }

    Ok(())
}

/// Write a trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, samples: &[Sample<6>]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, samples)
}
