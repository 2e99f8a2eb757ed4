use crate::utils::constants::STATION_FILE_EXTENSION;
use std::path::Path;

/// True for `<station>.txt` files; anything else in the data directory is ignored
pub fn is_station_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .map(|name| {
            name.strip_suffix(STATION_FILE_EXTENSION)
                .is_some_and(|stem| stem.ends_with('.'))
        })
        .unwrap_or(false)
}

/// Station id is the file name up to its first `.` (e.g. USC00110072.txt -> USC00110072)
pub fn station_id_from_path(path: &Path) -> Option<String> {
    let filename = path.file_name()?.to_str()?;
    filename.split('.').next().map(str::to_string)
}
