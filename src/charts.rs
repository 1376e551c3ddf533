use maud::Markup;
use maud::{html, PreEscaped};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Kind {
    #[serde(rename = "line")]
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Orange,
    Green,
    Blue,
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Orange => f.write_str("orange"),
            Color::Green => f.write_str("green"),
            Color::Blue => f.write_str("blue"),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Chart.js configuration for a single canvas.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(rename = "type")]
    kind: Kind,
    data: ChartData,
    options: Options,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Options {
    responsive: bool,
    scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
struct Scales {
    x: Axis,
    y: Axis,
}

#[derive(Debug, Clone, Serialize)]
struct Axis {
    display: bool,
    title: Title,
}

#[derive(Debug, Clone, Serialize)]
struct Title {
    display: bool,
    text: String,
}

impl Axis {
    fn titled(text: &str) -> Axis {
        Axis {
            display: true,
            title: Title {
                display: true,
                text: text.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartData {
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: Color,
    pub fill: bool,
}

impl Chart {
    pub fn new(kind: Kind, labels: Vec<String>, x_title: &str, y_title: &str) -> Chart {
        Chart {
            kind,
            data: ChartData {
                labels,
                datasets: vec![],
            },
            options: Options {
                responsive: true,
                scales: Scales {
                    x: Axis::titled(x_title),
                    y: Axis::titled(y_title),
                },
            },
        }
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.data.datasets.push(dataset)
    }

    #[cfg(test)]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    #[cfg(test)]
    pub fn datasets(&self) -> &[Dataset] {
        &self.data.datasets
    }

    #[cfg(test)]
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.data.datasets.iter().find(|d| d.label == label)
    }

    #[cfg(test)]
    pub fn is_responsive(&self) -> bool {
        self.options.responsive
    }

    #[cfg(test)]
    pub fn axis_titles(&self) -> (&str, &str) {
        (
            &self.options.scales.x.title.text,
            &self.options.scales.y.title.text,
        )
    }

    /// JSON configuration, safe to embed inside a `<script>` element.
    pub fn to_json_dict(&self) -> Result<String, serde_json::Error> {
        let s = serde_json::to_string(&self)?;
        Ok(s.replace("</", "<\\/"))
    }

    /// Script that replaces whatever chart is bound to `canvas_id` with this one.
    pub fn to_script(&self, canvas_id: &str) -> Result<String, serde_json::Error> {
        Ok(format!(
            "(function() {{ var canvas = document.getElementById('{id}'); \
             var previous = Chart.getChart(canvas); if (previous) {{ previous.destroy(); }} \
             new Chart(canvas.getContext('2d'), {config}); }})();",
            id = canvas_id,
            config = self.to_json_dict()?,
        ))
    }

    pub fn to_html(&self, canvas_id: &str) -> Result<Markup, serde_json::Error> {
        let script = self.to_script(canvas_id)?;
        Ok(html! {
            div {
                canvas id=(canvas_id) {
                }
            }
            script {
                (PreEscaped(script))
            }
        })
    }
}
