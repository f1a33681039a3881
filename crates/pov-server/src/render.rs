//! Server-side HTML rendering for the calculator page.
//!
//! One parameterized page covers both states of the gate. Every figure is
//! formatted here with [`pov_core::format`]; nothing rendered is read back.

use pov_core::calculator::{
    OP_EX_PERCENT_MAX, OP_EX_PERCENT_MIN, REVENUE_MAX, REVENUE_MIN, SavingsReport,
};
use pov_core::category::{CATEGORIES, ExpenseCategory};
use pov_core::format;
use pov_core::page::PageView;

/// Revenue slider step (one tenth of a billion).
const REVENUE_STEP: f64 = 100_000_000.0;

/// Extra inputs for one render that are not part of the page state.
#[derive(Debug, Default)]
pub struct RenderContext<'a> {
    /// The access value to carry into the next form submission.
    pub access: &'a str,
    /// Inline message for a rejected input change.
    pub input_error: Option<String>,
}

/// Render the whole page for the given view.
pub fn page(view: &PageView, ctx: &RenderContext<'_>) -> String {
    let mut html = String::with_capacity(16384);
    html.push_str(PAGE_HEAD);
    html.push_str(HEADER);

    match (&view.report, view.active_category) {
        (Some(report), Some(active)) if view.unlocked => {
            render_calculator(&mut html, report, active, view.problems, ctx);
        }
        _ => render_gate(&mut html, view.auth_error),
    }

    html.push_str("</body></html>\n");
    html
}

fn render_gate(html: &mut String, auth_error: bool) {
    html.push_str(
        "<main class=\"gate\"><form class=\"card gate-card\" method=\"post\" action=\"/unlock\">\
         <h3>Enter password to continue</h3>\
         <input type=\"password\" name=\"password\" autofocus placeholder=\"Password\"/>",
    );
    if auth_error {
        html.push_str("<p class=\"error\">Incorrect password. Please try again.</p>");
    }
    html.push_str("<button type=\"submit\" class=\"btn\">Unlock</button></form></main>");
}

fn render_calculator(
    html: &mut String,
    report: &SavingsReport,
    active: &ExpenseCategory,
    problems: &[&str],
    ctx: &RenderContext<'_>,
) {
    html.push_str("<main class=\"layout\"><div class=\"primary\">");
    html.push_str("<form id=\"pov\" class=\"card controls\" method=\"post\" action=\"/calculator\">");
    html.push_str(&hidden("access", ctx.access));
    html.push_str(&hidden("current_category", &active.id.to_string()));

    html.push_str(&slider(
        "revenue",
        "Annual Revenue",
        "",
        report.revenue,
        (REVENUE_MIN, REVENUE_MAX, REVENUE_STEP),
        format::billions,
    ));
    html.push_str(&slider(
        "op_ex_percent",
        "Operating Expenses",
        "(% of Revenue)",
        report.op_ex_percent,
        (OP_EX_PERCENT_MIN, OP_EX_PERCENT_MAX, 1.0),
        |v| format!("{v}%"),
    ));
    html.push_str("</form>");

    if let Some(msg) = &ctx.input_error {
        html.push_str("<p class=\"error\">");
        html.push_str(&escape(msg));
        html.push_str("</p>");
    }

    render_table(html, report, active.id);

    html.push_str("<section class=\"card drill\"><h3>Problems solved to achieve <strong>");
    html.push_str(&format::percent(active.efficiency_gain, 0));
    html.push_str("</strong> improvement in ");
    html.push_str(&escape(active.name));
    html.push_str("</h3><ol class=\"problems\">");
    for (i, problem) in problems.iter().enumerate() {
        html.push_str("<li><span class=\"num\">");
        html.push_str(&format!("{:02}.", i + 1));
        html.push_str("</span>");
        html.push_str(&escape(problem));
        html.push_str("</li>");
    }
    html.push_str("</ol></section></div>");

    html.push_str(SIDEBAR);
    html.push_str("</main>");
}

fn render_table(html: &mut String, report: &SavingsReport, active_id: usize) {
    html.push_str(
        "<section class=\"card\"><div class=\"row head\"><span>Expense Category</span>\
         <span>Allocation of OpEx</span><span>Annual Spend</span>\
         <span>Efficiency Gained</span><span>Annual Savings</span></div>",
    );

    for (row, cat) in report.categories.iter().zip(CATEGORIES.iter()) {
        let class = if row.id == active_id { "row active" } else { "row" };
        let band = format::range_band(cat);

        html.push_str(&format!(
            "<button type=\"submit\" form=\"pov\" name=\"category\" value=\"{}\" class=\"{class}\">",
            row.id
        ));
        html.push_str("<span class=\"name\">");
        html.push_str(&escape(row.name));
        html.push_str("</span>");

        html.push_str(&format!(
            "<span class=\"axis\"><span class=\"band\" style=\"left:{:.2}%;width:{:.2}%\" \
             title=\"{} to {}\"></span><span class=\"dot\" style=\"left:{:.2}%\"></span></span>",
            band.left_pct,
            band.width_pct,
            format::percent(cat.range.low, 1),
            format::percent(cat.range.high, 1),
            band.marker_pct,
        ));

        html.push_str("<span class=\"mono\">");
        html.push_str(&format::compact_currency(row.spend));
        html.push_str("</span>");

        html.push_str(&tick_meter(cat.efficiency_gain));

        html.push_str("<span class=\"mono gold\">");
        html.push_str(&format::currency(row.savings));
        html.push_str("</span></button>");
    }

    html.push_str("<div class=\"row total\"><span>Total Estimated Annual Savings</span><span class=\"range\">");
    html.push_str(&format::compact_currency(report.totals.total_savings_low));
    html.push_str(" &ndash; ");
    html.push_str(&format::compact_currency(report.totals.total_savings_high));
    html.push_str("</span><span class=\"mono gold\">");
    html.push_str(&format::currency(report.totals.total_savings));
    html.push_str("</span></div></section>");
}

fn slider(
    name: &str,
    label: &str,
    sub_label: &str,
    value: f64,
    (min, max, step): (f64, f64, f64),
    fmt: impl Fn(f64) -> String,
) -> String {
    let mut s = String::with_capacity(512);
    s.push_str("<label class=\"slider\"><span class=\"slider-head\"><span class=\"label\">");
    s.push_str(label);
    s.push_str("</span><strong>");
    s.push_str(&fmt(value));
    s.push_str("</strong></span>");
    s.push_str(&format!(
        "<input type=\"range\" name=\"{name}\" min=\"{min}\" max=\"{max}\" step=\"{step}\" \
         value=\"{value}\" style=\"--fill:{:.2}%\" onchange=\"this.form.submit()\"/>",
        format::slider_position(value, min, max)
    ));
    s.push_str("<span class=\"slider-foot\"><span>");
    s.push_str(&fmt(min));
    s.push_str("</span><span>");
    s.push_str(sub_label);
    s.push_str("</span><span>");
    s.push_str(&fmt(max));
    s.push_str("</span></span></label>");
    s
}

fn tick_meter(gain: f64) -> String {
    let active = format::tick_meter_index(gain);
    let mut s = String::with_capacity(1024);
    s.push_str("<span class=\"meter\"><span class=\"meter-value\">");
    s.push_str(&format::percent(gain, 0));
    s.push_str("</span><span class=\"ticks\">");
    for i in 0..format::TICK_COUNT {
        let class = if i == active {
            "tick on"
        } else if i % 5 == 0 {
            "tick major"
        } else {
            "tick"
        };
        s.push_str("<i class=\"");
        s.push_str(class);
        s.push_str("\"></i>");
    }
    s.push_str("</span></span>");
    s
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{name}\" value=\"{}\"/>",
        escape(value)
    )
}

/// Escape text for use in HTML bodies and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>AAXIS Proof of Value</title>
<meta name="description" content="No Risk. No Commitment. Prove It First."/>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,'Segoe UI',sans-serif;background:#0B1120;color:#cbd5e1;line-height:1.5}
.mono{font-family:ui-monospace,Menlo,monospace}
.gold{color:#fbbf24;font-weight:700}
.top{display:flex;justify-content:space-between;align-items:center;padding:24px 32px;border-bottom:1px solid #1e293b}
.top h2{color:#f59e0b;font-size:13px;letter-spacing:.2em;text-transform:uppercase}
.top h1{color:#fff;font-size:32px}.top h1 span{color:#3b82f6}
.top img{height:32px}
.card{background:rgba(30,41,59,.5);border:1px solid rgba(51,65,85,.5);border-radius:12px;padding:20px}
.layout{display:grid;grid-template-columns:5fr 1fr;gap:24px;padding:24px;max-width:2000px;margin:0 auto}
.primary{display:flex;flex-direction:column;gap:24px}
.controls{display:grid;grid-template-columns:1fr 1fr;gap:32px}
.slider{display:flex;flex-direction:column;gap:6px}
.slider-head,.slider-foot{display:flex;justify-content:space-between}
.slider-head strong{color:#fff;font-size:18px}
.slider-foot{font-size:10px;color:#64748b}
.label{font-size:12px;font-weight:600;text-transform:uppercase;color:#94a3b8}
input[type=range]{width:100%;accent-color:#3b82f6}
.row{display:grid;grid-template-columns:3fr 3fr 1fr 1fr 1.5fr;gap:16px;align-items:center;width:100%;padding:12px;border:1px solid transparent;border-radius:8px;background:none;color:inherit;font:inherit;text-align:left;cursor:pointer}
.row:hover{background:rgba(30,41,59,.5)}
.row.active{background:rgba(59,130,246,.1);border-color:rgba(59,130,246,.3)}
.row.head{font-size:11px;text-transform:uppercase;color:#64748b;cursor:default}
.row.total{border-top:1px solid #334155;border-radius:0;cursor:default;font-weight:700;color:#fff}
.name{white-space:nowrap;overflow:hidden;text-overflow:ellipsis;color:#fff}
.axis{position:relative;height:16px;border-bottom:1px solid #334155}
.band{position:absolute;top:4px;height:8px;border-radius:4px;background:#475569}
.row.active .band{background:#60a5fa}
.dot{position:absolute;top:8px;width:10px;height:10px;border-radius:50%;background:#fff;transform:translate(-50%,-50%)}
.meter{display:flex;flex-direction:column;align-items:center}
.meter-value{font-size:12px;font-weight:700;color:#f59e0b}
.ticks{display:flex;align-items:flex-end;gap:2px;height:16px}
.tick{display:block;width:1px;height:6px;background:#334155}
.tick.major{height:12px}.tick.on{width:2px;height:16px;background:#fbbf24}
.range{font-size:12px;color:#94a3b8;font-weight:400}
.drill h3{color:#fff;margin-bottom:12px}
.problems{list-style:none;display:grid;grid-template-columns:repeat(3,1fr);gap:8px}
.problems li{background:#0f172a;border:1px solid #1e293b;border-radius:8px;padding:10px}
.num{color:#3b82f6;font-weight:700;margin-right:8px}
.steps{display:flex;flex-direction:column;gap:16px}
.steps h4{color:#fff;margin-bottom:6px}.steps p,.steps li{font-size:13px;color:#94a3b8}
.steps ul{padding-left:16px}
.btn{padding:12px 24px;border:none;border-radius:8px;background:#2563eb;color:#fff;font-weight:700;cursor:pointer}
.gate{display:flex;justify-content:center;padding:120px 24px}
.gate-card{display:flex;flex-direction:column;gap:12px;width:360px}
.gate-card h3{color:#fff}
.gate-card input{padding:12px;border-radius:8px;border:1px solid #334155;background:#0f172a;color:#fff}
.error{color:#f87171;font-size:13px}
@media(max-width:1024px){.layout{grid-template-columns:1fr}.controls{grid-template-columns:1fr}.problems{grid-template-columns:1fr}}
</style></head>
<body>
"##;

const HEADER: &str = r#"<header class="top"><div><h2>Proof of Value (PoV)</h2>
<h1>No Risk. No Commitment. <span>Prove It First</span></h1></div>
<img src="/logo.svg" alt="AAXIS"/></header>
"#;

const SIDEBAR: &str = r#"<aside class="steps">
<div class="card"><h4>Step 1: Discovery</h4><p>Identify most impactful business problem to solve. We analyze your specific data landscape.</p></div>
<div class="card"><h4>Step 2: Build</h4><ul><li>Provide relevant data modeling.</li><li>AAXIS provides the data, AI engineering expertise, and full technology stack.</li></ul></div>
<div class="card"><h4>Step 3: Validate</h4><p>Validate results against the success criteria defined in discovery.</p></div>
<button type="button" class="btn">Start Your PoV</button>
</aside>"#;
