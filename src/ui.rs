pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Gamification Leaderboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3ea;
      --bg-2: #c9e2b8;
      --ink: #24302a;
      --update: #50a424;
      --time: #2f7d8c;
      --negative: #f1606d;
      --band-low: #cc4748;
      --band-fair: #fdd400;
      --band-good: #84b761;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(36, 48, 42, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f4f9ef 60%, #fbfcf8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5b6660;
      font-size: 1rem;
    }

    .board {
      display: grid;
      gap: 20px;
    }

    .user {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      grid-template-columns: 240px 1fr;
      gap: 24px;
      animation: rise 600ms ease;
    }

    .user h2 {
      margin: 0 0 4px;
      font-size: 1.3rem;
    }

    .rank {
      color: #8b948f;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
    }

    .totals {
      display: flex;
      gap: 16px;
      margin-top: 8px;
      font-size: 0.9rem;
    }

    .totals .update {
      color: var(--update);
    }

    .totals .time {
      color: var(--time);
    }

    .gauge {
      width: 100%;
      height: 150px;
      display: block;
    }

    .series {
      width: 100%;
      height: 220px;
      display: block;
    }

    svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .gauge-caption {
      fill: var(--ink);
      font-size: 18px;
      font-weight: 600;
    }

    .chart-grid {
      stroke: rgba(36, 48, 42, 0.12);
    }

    .chart-axis {
      stroke: rgba(36, 48, 42, 0.25);
      stroke-dasharray: 4 6;
    }

    .chart-label {
      fill: #747d78;
      font-size: 11px;
    }

    .line-update {
      fill: none;
      stroke: var(--update);
      stroke-width: 3;
    }

    .line-time {
      fill: none;
      stroke: var(--time);
      stroke-width: 3;
    }

    .point {
      fill: white;
      stroke-width: 2;
    }

    .point.negative {
      stroke: var(--negative);
    }

    .status {
      font-size: 0.95rem;
      color: #5b6660;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .hint {
      margin: 0;
      color: #69726d;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 720px) {
      .user {
        grid-template-columns: 1fr;
        padding: 20px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Gamification Leaderboard</h1>
      <p class="subtitle">Ranked by update and time points. Gauges show today, <span id="date">{{DATE}}</span>.</p>
    </header>

    <div class="status" id="status">Loading scores...</div>
    <section class="board" id="board"></section>

    <p class="hint">Daily scores are shown as recorded. Totals only count the positive part of each day.</p>
  </main>

  <script>
    const boardEl = document.getElementById('board');
    const statusEl = document.getElementById('status');
    const dateEl = document.getElementById('date');

    const BANDS = [
      { from: -100, to: -20, color: 'var(--band-low)' },
      { from: -20, to: 30, color: 'var(--band-fair)' },
      { from: 30, to: 100, color: 'var(--band-good)' }
    ];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    // Gauge spans -100..100 across a half circle.
    const gaugeAngle = (value) => Math.PI * (1 - (value + 100) / 200);

    const arcPoint = (cx, cy, r, value) => {
      const angle = gaugeAngle(value);
      return [cx + r * Math.cos(angle), cy - r * Math.sin(angle)];
    };

    const renderGauge = (svg, gauge) => {
      const cx = 120;
      const cy = 120;
      const r = 96;

      const bands = BANDS.map((band) => {
        const [x1, y1] = arcPoint(cx, cy, r, band.from);
        const [x2, y2] = arcPoint(cx, cy, r, band.to);
        return `<path d="M ${x1.toFixed(2)} ${y1.toFixed(2)} A ${r} ${r} 0 0 1 ${x2.toFixed(2)} ${y2.toFixed(2)}" stroke="${band.color}" stroke-width="14" fill="none" />`;
      }).join('');

      let ticks = '';
      for (let value = -100; value <= 100; value += 20) {
        const [x1, y1] = arcPoint(cx, cy, r - 10, value);
        const [x2, y2] = arcPoint(cx, cy, r - 18, value);
        ticks += `<line class="chart-grid" x1="${x1}" y1="${y1}" x2="${x2}" y2="${y2}" />`;
      }

      const [nx, ny] = arcPoint(cx, cy, r - 24, gauge.value);

      svg.setAttribute('viewBox', '0 0 240 150');
      svg.innerHTML = `
        ${bands}
        ${ticks}
        <line x1="${cx}" y1="${cy}" x2="${nx.toFixed(2)}" y2="${ny.toFixed(2)}" stroke="var(--ink)" stroke-width="3" stroke-linecap="round" />
        <circle cx="${cx}" cy="${cy}" r="6" fill="var(--ink)" />
        <text class="gauge-caption" x="${cx}" y="${cy + 26}" text-anchor="middle">${gauge.value} pts</text>
      `;
    };

    const renderSeries = (svg, series) => {
      if (!series.length) {
        svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No scored days</text>';
        return;
      }

      const width = 600;
      const height = 220;
      const paddingX = 44;
      const paddingY = 34;
      const top = 20;

      const values = series.flatMap((point) => [point.update_points, point.time_points]);
      let min = Math.min(0, ...values);
      let max = Math.max(0, ...values);
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = series.length > 1 ? (width - paddingX * 2) / (series.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const line = (field, cls) => {
        const d = series
          .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point[field]).toFixed(2)}`)
          .join(' ');
        const dots = series
          .map((point, index) => {
            const negative = point[field] < 0 ? ' negative' : '';
            return `<circle class="point${negative}" stroke="var(--${field === 'update_points' ? 'update' : 'time'})" cx="${x(index)}" cy="${y(point[field])}" r="4"><title>${point.date}: ${point[field]}</title></circle>`;
          })
          .join('');
        return `<path class="${cls}" d="${d}" />${dots}`;
      };

      let grid = '';
      const ticks = 4;
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(value)}" x2="${width - paddingX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${y(value) + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const labelEvery = series.length > 8 ? 2 : 1;
      const labels = series
        .map((point, index) =>
          index % labelEvery === 0
            ? `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.date.slice(5)}</text>`
            : ''
        )
        .join('');

      svg.setAttribute('viewBox', `0 0 ${width} ${height}`);
      svg.innerHTML = `
        ${grid}
        <line class="chart-axis" x1="${paddingX}" y1="${y(0)}" x2="${width - paddingX}" y2="${y(0)}" />
        ${line('update_points', 'line-update')}
        ${line('time_points', 'line-time')}
        ${labels}
      `;
    };

    const renderEntry = (entry) => {
      const user = entry.user;
      const card = document.createElement('article');
      card.className = 'user';
      card.innerHTML = `
        <div>
          <span class="rank">#${entry.rank}</span>
          <h2>${escapeHtml(user.name)}</h2>
          <svg class="gauge" role="img" aria-label="Today's score"></svg>
          <div class="totals">
            <span class="update">Update ${user.totals.update_points || 0}</span>
            <span class="time">Time ${user.totals.time_points || 0}</span>
          </div>
        </div>
        <svg class="series" role="img" aria-label="Daily points"></svg>
      `;
      renderGauge(card.querySelector('.gauge'), entry.gauge);
      renderSeries(card.querySelector('.series'), entry.series);
      return card;
    };

    const load = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Unable to load scores');
      }
      const data = await res.json();
      dateEl.textContent = data.date;
      boardEl.replaceChildren(...data.entries.map(renderEntry));
      setStatus(data.entries.length ? '' : 'No users in the scoring data yet.', '');
    };

    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
