use super::RenderCycle;
use crate::{
    dataset::DatasetTable,
    input::{FIELDS, FeatureInput, FieldSpec, Widget},
};

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; display: flex; }
aside { width: 18rem; min-height: 100vh; padding: 1rem; background: #f0f2f6; box-sizing: border-box; }
main { flex: 1; padding: 1rem 2rem; overflow-x: auto; }
label { display: block; margin-top: 0.6rem; font-size: 0.9rem; }
input, select { width: 100%; box-sizing: border-box; padding: 0.3rem; }
button { margin-top: 1rem; padding: 0.4rem 1rem; }
.success { margin-top: 1rem; padding: 0.75rem; background: #d4edda; color: #155724; border-radius: 0.25rem; }
.error { padding: 0.75rem; background: #f8d7da; color: #721c24; border-radius: 0.25rem; }
table { border-collapse: collapse; font-size: 0.85rem; }
th, td { border: 1px solid #ddd; padding: 0.25rem 0.5rem; white-space: nowrap; }
"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the full dashboard for a finished render cycle.
pub fn render_page(title: &str, cycle: &RenderCycle, dataset: &DatasetTable) -> String {
    let mut sidebar = String::from("<h2>Enter Car Features</h2>\n<form method=\"get\" action=\"/\">\n");
    for field in FIELDS {
        sidebar.push_str(&render_widget(field, cycle.input()));
    }
    sidebar.push_str("<button type=\"submit\" name=\"predict\" value=\"1\">Predict</button>\n</form>\n");

    if let Some(prediction) = cycle.prediction() {
        sidebar.push_str(&format!(
            "<div class=\"success\">{}</div>\n",
            escape_html(&prediction.message())
        ));
    }

    let body = format!(
        "<h1>{}</h1>\n<h3>Dataset</h3>\n{}",
        escape_html(title),
        render_table(dataset)
    );

    layout(title, &format!("<aside>\n{sidebar}</aside>\n<main>\n{body}</main>"))
}

/// Page shown when a render cycle aborts.
pub fn render_error_page(title: &str, message: &str) -> String {
    let body = format!(
        "<main>\n<h1>{}</h1>\n<div class=\"error\">{}</div>\n</main>",
        escape_html(title),
        escape_html(message)
    );
    layout(title, &body)
}

pub fn render_table(dataset: &DatasetTable) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for header in &dataset.headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &dataset.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn render_widget(field: &FieldSpec, input: &FeatureInput) -> String {
    let value = input.display_value(field.name).unwrap_or_default();
    let label = format!(
        "<label for=\"{name}\">{label}</label>\n",
        name = field.name,
        label = escape_html(field.label)
    );

    let control = match field.widget {
        Widget::Text { .. } => format!(
            "<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\">\n",
            name = field.name,
            value = escape_html(&value)
        ),
        Widget::Select { options } => {
            let mut html = format!("<select id=\"{0}\" name=\"{0}\">\n", field.name);
            for option in options {
                let selected = if *option == value { " selected" } else { "" };
                html.push_str(&format!(
                    "<option value=\"{0}\"{1}>{0}</option>\n",
                    escape_html(option),
                    selected
                ));
            }
            html.push_str("</select>\n");
            html
        }
        Widget::Integer { min } => format!(
            "<input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{min}\" step=\"1\" value=\"{value}\">\n",
            name = field.name,
        ),
        Widget::Float { min } => format!(
            "<input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{min:.2}\" step=\"0.01\" value=\"{value}\">\n",
            name = field.name,
        ),
    };

    label + &control
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        content
    )
}
