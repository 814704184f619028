use crate::{
    constants::REPORT_HEADERS,
    error::{BookingError, Result},
    venue::Venue,
};
use chrono::Local;
use csv::WriterBuilder;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Writes every committed booking of `venue` to a timestamped CSV file in
/// `output_dir`, creating the directory if needed.
pub fn export_bookings(venue: &Venue, output_dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("bookings_{timestamp}.csv");

    std::fs::create_dir_all(output_dir).map_err(|e| BookingError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let file_path = output_dir.join(filename);

    let file = File::create(&file_path).map_err(|e| BookingError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }
    let mut wtr = builder.from_writer(BufWriter::new(file));

    wtr.write_record(REPORT_HEADERS)?;
    for (id, seats) in venue.bookings() {
        let labels: Vec<String> = seats.iter().map(ToString::to_string).collect();
        let count = seats.len().to_string();
        wtr.write_record([id.as_str(), labels.join(" ").as_str(), count.as_str()])?;
    }

    wtr.flush()?;
    Ok(file_path)
}
