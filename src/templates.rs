use crate::charts::Chart;
use crate::date_range::DateRange;
use crate::notice::Notice;
use crate::now;
use crate::render::CANVAS_ID;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const NBSP: PreEscaped<&str> = PreEscaped("&nbsp;");

/// Pages headers.
fn header() -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            script src="https://cdn.jsdelivr.net/npm/chart.js" { }

            title { "Exchange Rates" }
        }
    }
}

/// A static footer.
fn footer() -> Markup {
    html! {
        p { (NBSP) }
        footer {
            p { "Page created " (now()) }
        }
    }
}

fn filter_form(fields: &DateRange) -> Markup {
    html! {
        div {
            label {
                "Start date "
                input type="date" id="start_date" value=(fields.start);
            }
            " "
            label {
                "End date "
                input type="date" id="end_date" value=(fields.end);
            }
            " "
            button type="button" id="filter" { "Filter" }
        }
    }
}

/// The final Markup, including `header` and `footer`.
pub fn page(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang = "en" {
            (header())
            body style="font-family: Arial, Helvetica, sans-serif;" {
                h1 { "Exchange Rates" }
                (content)
                (footer())
            }
        }
    }
}

/// Date fields, the latest notice if any, and the chart bound to the canvas.
///
/// Without a chart the canvas is still emitted, empty.
pub fn chart_page(
    fields: &DateRange,
    chart: Option<&Chart>,
    notice: Option<Notice>,
) -> Result<Markup, serde_json::Error> {
    let chart = match chart {
        Some(chart) => chart.to_html(CANVAS_ID)?,
        None => html! { div { canvas id=(CANVAS_ID) { } } },
    };
    let content = html! {
        (filter_form(fields))
        p { (NBSP) }
        @if let Some(notice) = notice {
            p class="notice" { (notice.message()) }
        }
        (chart)
    };
    Ok(page(content))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::charts::test::mock_lines_chart;
    use maud::html;

    #[test]
    fn test_escape() {
        let a = html! { p { "<>" } };
        assert_eq!(a.into_string(), "<p>&lt;&gt;</p>");
    }

    #[test]
    fn test_empty_canvas() {
        let fields = DateRange::new("2024-01-01", "2024-01-31");
        let html = chart_page(&fields, None, None).unwrap().into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<canvas id="exchangeRatesChart"></canvas>"#));
        assert!(!html.contains("new Chart("));
        assert!(!html.contains(r#"class="notice""#));
    }

    #[test]
    fn test_chart_and_notice() {
        let fields = DateRange::new("2024-01-01", "2024-01-31");
        let chart = mock_lines_chart();
        let html = chart_page(&fields, Some(&chart), Some(Notice::TransportFailure))
            .unwrap()
            .into_string();
        assert!(html.contains("new Chart("));
        assert!(html.contains("Failed to fetch data."));
    }

    #[test]
    fn test_field_values_escaped() {
        let fields = DateRange::new("\"><script>", "");
        let html = chart_page(&fields, None, None).unwrap().into_string();
        assert!(!html.contains("\"><script>"));
    }
}
