//! The status page.
//!
//! Rendered in-process from a fixed template; the page is part of the
//! demo surface, not of the core logic. Its embedded script is the
//! status client: it polls `/api/transaction` every two seconds (plus
//! once on load) with a cache-busting timestamp, treats anything other
//! than a 200 as critical, and shows client-measured round-trip latency.
//! Polls overlap freely: a hung failing request never delays the next
//! scheduled one.

/// Poll interval for the embedded status client, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 2_000;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Observability Demo</title>
    <style>
        body { font-family: 'Segoe UI', sans-serif; display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100vh; margin: 0; transition: background 0.5s; }
        .container { text-align: center; padding: 40px; border-radius: 20px; background: white; box-shadow: 0 10px 25px rgba(0,0,0,0.1); width: 400px; }
        h1 { color: #333; }
        .status-indicator { font-size: 80px; margin: 20px 0; }
        .btn { padding: 15px 30px; font-size: 18px; cursor: pointer; border: none; border-radius: 8px; color: white; font-weight: bold; transition: transform 0.2s; }
        .btn-chaos { background-color: #e74c3c; }
        .btn-chaos:hover { background-color: #c0392b; }
        .btn-fix { background-color: #2ecc71; }
        .meta { color: #777; margin-top: 20px; font-size: 14px; }
        body.critical { background-color: #ffebee; }
        .critical .container { border: 2px solid #e74c3c; }
        body.healthy { background-color: #e8f5e9; }
        .healthy .container { border: 2px solid #2ecc71; }
    </style>
</head>
<body class="loading">
    <div class="container">
        <h1>Financial App</h1>
        <div id="status-icon" class="status-indicator">🔄</div>
        <h2 id="status-text">Loading...</h2>
        <p class="meta">Version: <strong>%VERSION%</strong></p>
        <p class="meta">Latency: <strong id="latency">--</strong> ms</p>
        <hr>
        <p>Demo control panel:</p>
        <a href="/toggle-chaos">
            <button class="btn %TOGGLE_CLASS%">%TOGGLE_LABEL%</button>
        </a>
    </div>
    <script>
        async function checkHealth() {
            const start = Date.now();
            try {
                // Timestamp query parameter defeats browser-side caching too
                const response = await fetch('/api/transaction?t=' + Date.now());
                const duration = Date.now() - start;
                document.getElementById('latency').innerText = duration;

                if (response.status === 200) {
                    setHealthy();
                } else {
                    setCritical();
                }
            } catch (e) {
                setCritical();
            }
        }

        function setHealthy() {
            document.body.className = 'healthy';
            document.getElementById('status-icon').innerText = '✅';
            document.getElementById('status-text').innerText = 'System operational';
            document.getElementById('status-text').style.color = '#2ecc71';
        }

        function setCritical() {
            document.body.className = 'critical';
            document.getElementById('status-icon').innerText = '🔥';
            document.getElementById('status-text').innerText = 'CRITICAL FAILURE';
            document.getElementById('status-text').style.color = '#e74c3c';
        }

        setInterval(checkHealth, %POLL_INTERVAL%);
        checkHealth();
    </script>
</body>
</html>
"#;

/// Render the status page for the current switch state.
pub fn render(version_label: &str, broken: bool) -> String {
    let (toggle_class, toggle_label) = if broken {
        ("btn-fix", "REPAIR MANUALLY")
    } else {
        ("btn-chaos", "💥 TRIGGER CHAOS")
    };

    TEMPLATE
        .replace("%VERSION%", version_label)
        .replace("%TOGGLE_CLASS%", toggle_class)
        .replace("%TOGGLE_LABEL%", toggle_label)
        .replace("%POLL_INTERVAL%", &POLL_INTERVAL_MS.to_string())
}
