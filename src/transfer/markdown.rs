use std::fmt::Write;

use crate::error::AppError;
use crate::state::record::Record;
use super::download::Download;

pub const FILE_NAME: &str = "requests.md";
pub const CONTENT_TYPE: &str = "text/markdown";

/// Render every record as a `## Request N` section, in store order,
/// separated by a blank line. An empty slice renders as an empty string.
pub fn to_markdown(records: &[Record]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| section(i + 1, record))
        .collect::<Vec<_>>()
        .join("\n")
}

fn section(number: usize, record: &Record) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "## Request {number}\n\
         \n\
         **URL:** {url}\n\
         \n\
         **Method:** {method}\n\
         \n\
         **Payload:**\n\
         ```json\n\
         {payload}\n\
         ```\n\
         \n\
         **Response:**\n\
         ```json\n\
         {response}\n\
         ```\n",
        url = record.url,
        method = record.method,
        payload = record.payload,
        response = record.response,
    );
    out
}

pub fn download(records: &[Record]) -> Result<Download, AppError> {
    Ok(Download {
        file_name: FILE_NAME,
        content_type: CONTENT_TYPE.parse()?,
        body: to_markdown(records),
    })
}
