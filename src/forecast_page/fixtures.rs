//! Markup builders mimicking the forecast page, shared by the crate's tests.

pub(crate) fn forecast_page(rows: &[String]) -> String {
    format!(
        "<html><body><h1>Visibility</h1>\
         <table id=\"weather-forecast-table\"><tbody>{}</tbody></table>\
         </body></html>",
        rows.concat()
    )
}

pub(crate) fn day_row(date: &str) -> String {
    format!("<tr class=\"weather-day\"><td colspan=\"11\">{date}</td></tr>")
}

/// An hour row with the time in cell 0, filler in cells 1-8 and visibility in cell 9.
pub(crate) fn hour_row(time: &str, visibility: &str) -> String {
    let filler = "<td>-</td>".repeat(8);
    format!(
        "<tr class=\"weather-hour\"><td>{time}</td>{filler}<td>{visibility}</td><td>NW</td></tr>"
    )
}

pub(crate) fn short_hour_row(time: &str, cells: usize) -> String {
    let filler = "<td>1 km</td>".repeat(cells.saturating_sub(1));
    format!("<tr class=\"weather-hour\"><td>{time}</td>{filler}</tr>")
}
