//! Server-rendered HTML pages.
//!
//! Templates are embedded constants assembled with `format!`; scraped and
//! user-supplied text always goes through `escape_html` before it reaches
//! a page.

use crate::scrape::stats::ProfileStats;
use crate::scrape::trades::TradeRecord;

const STYLE: &str = "\
*{box-sizing:border-box;margin:0;padding:0}\
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#0f1117;color:#e1e4e8;min-height:100vh;padding:16px}\
h1{font-size:20px;margin-bottom:4px;color:#58a6ff}\
h2{font-size:13px;font-weight:600;color:#8b949e;margin-bottom:12px}\
nav{display:flex;gap:14px;margin-bottom:16px;font-size:13px}\
nav a{color:#58a6ff;text-decoration:none}\
nav span{color:#8b949e;margin-left:auto}\
main{max-width:900px;margin:0 auto}\
.flash{background:#3a2d12;border:1px solid #d29922;color:#d29922;border-radius:6px;padding:8px 12px;margin-bottom:10px;font-size:13px}\
.error{background:#3a1214;border:1px solid #da3633;color:#f85149;border-radius:6px;padding:8px 12px;margin-bottom:10px;font-size:13px}\
.grid{display:grid;grid-template-columns:repeat(4,1fr);gap:10px;margin-top:12px}\
.card{background:#161b22;border:1px solid #30363d;border-radius:8px;padding:12px}\
.card span{color:#8b949e;font-size:12px;display:block}\
.card strong{color:#e1e4e8;font-size:16px}\
table{width:100%;border-collapse:collapse;margin-top:12px;font-size:13px}\
th{color:#8b949e;text-align:left;padding:6px;border-bottom:1px solid #30363d;text-transform:uppercase;font-size:11px;letter-spacing:1px}\
td{padding:6px;border-bottom:1px solid #21262d}\
form.auth{max-width:340px;margin:60px auto;background:#161b22;border:1px solid #30363d;border-radius:8px;padding:20px}\
label{font-size:12px;color:#8b949e;display:block;margin:10px 0 3px}\
input{background:#0d1117;border:1px solid #30363d;color:#e1e4e8;padding:7px 10px;border-radius:4px;font-size:13px;width:100%}\
input:focus{outline:none;border-color:#58a6ff}\
button{margin-top:14px;padding:8px 14px;border:none;border-radius:6px;font-size:13px;font-weight:600;cursor:pointer;background:#238636;color:#fff;width:100%}\
#chat{background:#161b22;border:1px solid #30363d;border-radius:8px;padding:12px;min-height:280px;max-height:420px;overflow-y:auto;font-size:13px;margin-top:12px}\
.msg{padding:4px 0;border-bottom:1px solid #21262d}\
.msg b{color:#58a6ff}\
#chat-form{display:flex;gap:8px;margin-top:10px}\
#chat-form button{width:auto;margin-top:0}";

const AGENT_BODY: &str = r#"
<h1>TickerBot Agent</h1>
<h2>Ask about stocks, reports and market concepts</h2>
<div id="chat"></div>
<form id="chat-form">
  <input id="message" autocomplete="off" placeholder="Type a message...">
  <button type="submit">Send</button>
</form>
<script>
const chat = document.getElementById('chat');
function append(who, text) {
  const div = document.createElement('div');
  div.className = 'msg';
  const b = document.createElement('b');
  b.textContent = who + ': ';
  div.appendChild(b);
  div.appendChild(document.createTextNode(text));
  chat.appendChild(div);
  chat.scrollTop = chat.scrollHeight;
}
document.getElementById('chat-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const input = document.getElementById('message');
  const text = input.value;
  input.value = '';
  append('You', text);
  try {
    const res = await fetch('/agent_chat', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify({message: text})
    });
    const data = await res.json();
    append('TickerBot', data.reply);
  } catch (err) {
    append('TickerBot', 'Request failed: ' + err);
  }
});
</script>
"#;

/// Escapes text for safe interpolation into HTML bodies and attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
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

fn layout(title: &str, user_email: Option<&str>, flashes: &[String], body: &str) -> String {
    let nav = match user_email {
        Some(email) => format!(
            "<nav><a href=\"/dashboard\">Dashboard</a><a href=\"/reports\">Reports</a>\
             <a href=\"/agent\">Agent</a><a href=\"/profile\">Profile</a>\
             <a href=\"/logout\">Sign out</a><span>{}</span></nav>",
            escape_html(email)
        ),
        None => String::new(),
    };
    let flash_html: String = flashes
        .iter()
        .map(|m| format!("<div class=\"flash\">{}</div>", escape_html(m)))
        .collect();

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
         <title>{title}</title><style>{STYLE}</style></head>\
         <body>{nav}{flash_html}<main>{body}</main></body></html>",
        title = escape_html(title),
    )
}

pub fn login_page(error: Option<&str>, flashes: &[String]) -> String {
    let error_html = match error {
        Some(msg) => format!("<div class=\"error\">{}</div>", escape_html(msg)),
        None => String::new(),
    };
    let body = format!(
        "<form class=\"auth\" method=\"post\" action=\"/login\">\
         <h1>Stock Agent</h1><h2>Sign in to continue</h2>{error_html}\
         <label for=\"email\">Email</label>\
         <input id=\"email\" name=\"email\" type=\"email\" required>\
         <label for=\"password\">Password</label>\
         <input id=\"password\" name=\"password\" type=\"password\" required>\
         <button type=\"submit\">Sign in</button></form>",
    );
    layout("Sign in", None, flashes, &body)
}

pub fn dashboard_page(user_email: &str, stats: &ProfileStats, flashes: &[String]) -> String {
    let cards: String = [
        ("Trades", &stats.trades),
        ("Issuers", &stats.issuers),
        ("Volume", &stats.volume),
        ("Last Traded", &stats.last_traded),
        ("District", &stats.district),
        ("Years Active", &stats.years_active),
        ("Date of Birth", &stats.dob),
        ("Age", &stats.age),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            "<div class=\"card\"><span>{}</span><strong>{}</strong></div>",
            label,
            escape_html(value)
        )
    })
    .collect();

    let body = format!(
        "<h1>{name}</h1><h2>{subtitle}</h2><div class=\"grid\">{cards}</div>",
        name = escape_html(&stats.name),
        subtitle = escape_html(&stats.subtitle),
    );
    layout("Dashboard", Some(user_email), flashes, &body)
}

pub fn reports_page(user_email: &str, trades: &[TradeRecord], flashes: &[String]) -> String {
    let rows: String = if trades.is_empty() {
        "<tr><td colspan=\"5\">No trades available.</td></tr>".to_string()
    } else {
        trades
            .iter()
            .map(|t| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&t.ticker),
                    escape_html(&t.change),
                    escape_html(&t.time),
                    escape_html(&t.action),
                    escape_html(&t.price),
                )
            })
            .collect()
    };

    let body = format!(
        "<h1>Trade Reports</h1><h2>Disclosed trades scraped from CapitolTrades</h2>\
         <table><thead><tr><th>Ticker</th><th>Disclosed</th><th>Traded</th>\
         <th>Action</th><th>Amount</th></tr></thead><tbody>{rows}</tbody></table>",
    );
    layout("Reports", Some(user_email), flashes, &body)
}

pub fn agent_page(user_email: &str, flashes: &[String]) -> String {
    layout("Agent", Some(user_email), flashes, AGENT_BODY)
}

pub fn profile_page(user_email: &str, flashes: &[String]) -> String {
    let body = format!(
        "<h1>Profile</h1><h2>Account details</h2>\
         <div class=\"card\"><span>Signed in as</span><strong>{}</strong></div>",
        escape_html(user_email)
    );
    layout("Profile", Some(user_email), flashes, &body)
}

pub fn signup_page() -> String {
    layout("Sign up", None, &[], "<h1>Signup page coming soon!</h1>")
}
