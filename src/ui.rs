use crate::models::{AppData, CustomCard, MetricsResponse, ProfileResponse};
use chrono::Weekday;
use serde_json::json;

/// The streak indicator always renders 30 slots, two rows of 15, filled
/// left to right.
pub const STREAK_SLOTS: u32 = 30;
pub const SLOTS_PER_ROW: u32 = 15;

pub fn render_index(data: &AppData, date: &str) -> String {
    let metrics = MetricsResponse::project(&data.metrics);
    let profile = ProfileResponse::project(&data.profile);
    let bootstrap = json!({
        "metrics": metrics,
        "profile": profile,
        "labels": weekday_labels(),
    });

    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{STREAK}}", &metrics.streak.to_string())
        .replace("{{DOTS}}", &render_dots(data.metrics.streak))
        .replace("{{STEPS}}", &metrics.steps_display)
        .replace("{{PERCENTILE}}", &metrics.percentile_display)
        .replace("{{CALORIES}}", &metrics.calories_display)
        .replace("{{DISTANCE}}", &metrics.distance.to_string())
        .replace("{{ACTIVE_MINUTES}}", &metrics.active_minutes.to_string())
        .replace("{{PROFILE_NAME}}", &escape_html(&profile.name))
        .replace("{{PROFILE_AGE}}", &profile.age_display)
        .replace("{{PROFILE_EDUCATION}}", &escape_html(&profile.education))
        .replace("{{AVATAR_INITIAL}}", &escape_html(&profile.initial))
        .replace("{{CARDS}}", &render_cards(&data.cards))
        .replace("{{BOOTSTRAP}}", &escape_script(&bootstrap.to_string()))
}

/// Weekday labels Monday first, matching the activity sequence order.
pub fn weekday_labels() -> Vec<String> {
    let mut labels = Vec::with_capacity(7);
    let mut day = Weekday::Mon;
    for _ in 0..7 {
        labels.push(day.to_string());
        day = day.succ();
    }
    labels
}

pub fn render_dots(streak: u32) -> String {
    let filled = streak.min(STREAK_SLOTS);
    let mut dots = String::new();
    for index in 0..STREAK_SLOTS {
        if index > 0 && index % SLOTS_PER_ROW == 0 {
            dots.push_str("</div><div class=\"dot-row\">");
        }
        if index < filled {
            dots.push_str("<span class=\"dot filled\"></span>");
        } else {
            dots.push_str("<span class=\"dot\"></span>");
        }
    }
    format!("<div class=\"dot-row\">{dots}</div>")
}

pub fn render_cards(cards: &[CustomCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                "<div class=\"stat card custom\">\
                 <div class=\"card-head\"><span class=\"glyph\">{}</span>\
                 <span class=\"label\">{}</span></div>\
                 <span class=\"value\">{}</span>\
                 <span class=\"unit\">{}</span></div>",
                card.icon.glyph(),
                escape_html(&card.name),
                escape_html(&card.value),
                escape_html(&card.unit)
            )
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// JSON embedded in a <script> block must not be able to close the block.
// `<` only occurs inside JSON strings, where the unicode escape is legal.
fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sport Stats</title>
  <style>
    :root {
      --bg: #111113;
      --panel: #1a1a1d;
      --card: #202024;
      --ink: #f4f4f5;
      --muted: #9a9aa3;
      --accent: #ff6b35;
      --accent-soft: rgba(255, 107, 53, 0.16);
      --line: rgba(255, 255, 255, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 32px 18px 48px;
      display: grid;
      justify-items: center;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3.5vw, 2.2rem);
      letter-spacing: -0.02em;
    }

    .date {
      color: var(--muted);
      font-size: 0.95rem;
    }

    .avatar {
      width: 44px;
      height: 44px;
      border-radius: 50%;
      border: none;
      background: var(--accent);
      color: #fff;
      font-size: 1.2rem;
      font-weight: 700;
      cursor: pointer;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 18px;
      padding: 20px;
      display: grid;
      gap: 10px;
      position: relative;
    }

    .stat .label {
      color: var(--muted);
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
    }

    .stat .value {
      font-size: 2rem;
      font-weight: 700;
    }

    .stat .unit,
    .stat .sub {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .stat .sub strong {
      color: var(--accent);
    }

    .card-head {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .glyph {
      font-size: 1.4rem;
    }

    .edit {
      position: absolute;
      top: 14px;
      right: 14px;
      background: transparent;
      border: 1px solid var(--line);
      border-radius: 999px;
      color: var(--muted);
      padding: 4px 12px;
      font-size: 0.8rem;
      cursor: pointer;
    }

    .edit:hover {
      color: var(--ink);
      border-color: var(--accent);
    }

    .dots {
      display: grid;
      gap: 8px;
    }

    .dot-row {
      display: flex;
      gap: 6px;
    }

    .dot {
      width: 12px;
      height: 12px;
      border-radius: 50%;
      background: var(--line);
    }

    .dot.filled {
      background: var(--accent);
    }

    .chart-area {
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 18px;
      padding: 20px;
      display: grid;
      gap: 14px;
    }

    .chart-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    #chart {
      width: 100%;
      height: 220px;
      display: block;
    }

    .bar {
      fill: rgba(255, 255, 255, 0.82);
      rx: 6;
    }

    .bar.accent {
      fill: var(--accent);
    }

    .bar-label {
      fill: var(--muted);
      font-size: 11px;
      text-anchor: middle;
    }

    .add-card {
      border: 1px dashed var(--line);
      border-radius: 18px;
      background: transparent;
      color: var(--muted);
      font-size: 1rem;
      min-height: 120px;
      cursor: pointer;
    }

    .add-card:hover {
      color: var(--accent);
      border-color: var(--accent);
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.6);
      display: grid;
      place-items: center;
      padding: 18px;
    }

    .modal.hidden {
      display: none;
    }

    .dialog {
      width: min(380px, 100%);
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 18px;
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    .dialog h3 {
      margin: 0;
    }

    .dialog label {
      display: grid;
      gap: 6px;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .dialog input,
    .dialog select {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 10px;
      color: var(--ink);
      padding: 10px 12px;
      font-size: 1rem;
    }

    .dialog .actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
    }

    .btn {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
    }

    .btn.primary {
      background: var(--accent);
      color: #fff;
    }

    .btn.ghost {
      background: transparent;
      color: var(--muted);
      border: 1px solid var(--line);
    }

    .form-error {
      color: #ff6464;
      font-size: 0.85rem;
      min-height: 1.1em;
      margin: 0;
    }

    .week-grid {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 10px;
    }

    .profile-view {
      display: grid;
      gap: 6px;
      justify-items: center;
      text-align: center;
    }

    .profile-view .avatar {
      width: 64px;
      height: 64px;
      font-size: 1.6rem;
      cursor: default;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Sport Stats</h1>
        <div class="date">{{DATE}}</div>
      </div>
      <button class="avatar" id="profileBtn" type="button">{{AVATAR_INITIAL}}</button>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Day streak</span>
        <span class="value" id="streakNumber">{{STREAK}}</span>
        <div class="dots" id="dotsContainer">{{DOTS}}</div>
        <button class="edit" type="button" data-modal="streakModal">Edit</button>
      </div>
      <div class="stat">
        <span class="label">Steps today</span>
        <span class="value" id="stepsNumber">{{STEPS}}</span>
        <span class="sub">Top <strong id="percentile">{{PERCENTILE}}</strong> of users</span>
        <button class="edit" type="button" data-modal="stepsModal">Edit</button>
      </div>
      <div class="stat">
        <span class="label">Calories</span>
        <span class="value" id="caloriesNumber">{{CALORIES}}</span>
        <span class="unit">kcal burned</span>
      </div>
      <div class="stat">
        <span class="label">Distance</span>
        <span class="value" id="distanceNumber">{{DISTANCE}}</span>
        <span class="unit">km</span>
      </div>
      <div class="stat">
        <span class="label">Active minutes</span>
        <span class="value" id="activeMinutesNumber">{{ACTIVE_MINUTES}}</span>
        <span class="unit">min</span>
      </div>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <h2>Weekly activity</h2>
        <button class="edit" type="button" data-modal="activityModal" style="position:static">Edit</button>
      </div>
      <svg id="chart" viewBox="0 0 640 220" role="img" aria-label="Weekly activity chart"></svg>
    </section>

    <section class="panel" id="additionalStats">{{CARDS}}
      <button class="add-card" id="addCardBtn" type="button">+ Add custom stat</button>
    </section>
  </main>

  <div class="modal hidden" id="streakModal">
    <div class="dialog">
      <h3>Edit streak</h3>
      <label>Days (0-30)
        <input id="streakInput" type="number" min="0" max="30" />
      </label>
      <p class="form-error" id="streakError"></p>
      <div class="actions">
        <button class="btn ghost" type="button" data-close="streakModal">Cancel</button>
        <button class="btn primary" type="button" id="saveStreakBtn">Save</button>
      </div>
    </div>
  </div>

  <div class="modal hidden" id="stepsModal">
    <div class="dialog">
      <h3>Edit steps</h3>
      <label>Steps
        <input id="stepsInput" type="number" min="0" />
      </label>
      <label>Percentile (0-100)
        <input id="percentileInput" type="number" min="0" max="100" />
      </label>
      <p class="form-error" id="stepsError"></p>
      <div class="actions">
        <button class="btn ghost" type="button" data-close="stepsModal">Cancel</button>
        <button class="btn primary" type="button" id="saveStepsBtn">Save</button>
      </div>
    </div>
  </div>

  <div class="modal hidden" id="activityModal">
    <div class="dialog">
      <h3>Edit weekly activity</h3>
      <div class="week-grid" id="activityInputs"></div>
      <p class="form-error" id="activityError"></p>
      <div class="actions">
        <button class="btn ghost" type="button" data-close="activityModal">Cancel</button>
        <button class="btn primary" type="button" id="saveActivityBtn">Save</button>
      </div>
    </div>
  </div>

  <div class="modal hidden" id="profileModal">
    <div class="dialog">
      <div class="profile-view">
        <span class="avatar" id="profileAvatar">{{AVATAR_INITIAL}}</span>
        <h3 id="profileName">{{PROFILE_NAME}}</h3>
        <span class="unit" id="profileAge">{{PROFILE_AGE}}</span>
        <span class="unit" id="profileEducation">{{PROFILE_EDUCATION}}</span>
      </div>
      <div class="actions">
        <button class="btn ghost" type="button" data-close="profileModal">Close</button>
        <button class="btn primary" type="button" id="editProfileBtn">Edit</button>
      </div>
    </div>
  </div>

  <div class="modal hidden" id="editProfileModal">
    <div class="dialog">
      <h3>Edit profile</h3>
      <label>Name
        <input id="editProfileName" type="text" />
      </label>
      <label>Age
        <input id="editProfileAge" type="number" min="1" />
      </label>
      <label>Education
        <input id="editProfileEducation" type="text" />
      </label>
      <p class="form-error" id="profileError"></p>
      <div class="actions">
        <button class="btn ghost" type="button" data-close="editProfileModal">Cancel</button>
        <button class="btn primary" type="button" id="saveProfileBtn">Save</button>
      </div>
    </div>
  </div>

  <div class="modal hidden" id="customStatModal">
    <div class="dialog">
      <h3>Add custom stat</h3>
      <label>Name
        <input id="customStatName" type="text" />
      </label>
      <label>Value
        <input id="customStatValue" type="text" />
      </label>
      <label>Unit
        <input id="customStatUnit" type="text" />
      </label>
      <label>Icon
        <select id="customStatIcon">
          <option value="clock">Clock</option>
          <option value="heart">Heart</option>
          <option value="fire">Fire</option>
          <option value="water">Water</option>
          <option value="muscle">Muscle</option>
          <option value="trophy">Trophy</option>
        </select>
      </label>
      <p class="form-error" id="cardError"></p>
      <div class="actions">
        <button class="btn ghost" type="button" data-close="customStatModal">Cancel</button>
        <button class="btn primary" type="button" id="saveCardBtn">Add</button>
      </div>
    </div>
  </div>

  <script>
    const bootstrap = {{BOOTSTRAP}};
    let metrics = bootstrap.metrics;
    let profile = bootstrap.profile;
    const labels = bootstrap.labels;

    const byId = (id) => document.getElementById(id);
    const chartEl = byId('chart');

    const openModal = (id) => byId(id).classList.remove('hidden');
    const closeModal = (id) => byId(id).classList.add('hidden');
    const setError = (id, message) => { byId(id).textContent = message || ''; };

    const renderDots = (streak) => {
      const container = byId('dotsContainer');
      container.innerHTML = '';
      for (let row = 0; row < 2; row += 1) {
        const rowEl = document.createElement('div');
        rowEl.className = 'dot-row';
        for (let i = 0; i < 15; i += 1) {
          const dot = document.createElement('span');
          dot.className = 'dot';
          if (row * 15 + i < streak) {
            dot.classList.add('filled');
          }
          rowEl.appendChild(dot);
        }
        container.appendChild(rowEl);
      }
    };

    const renderChart = () => {
      const width = 640;
      const height = 220;
      const paddingY = 26;
      const values = metrics.activity;
      const max = Math.max(...values, 1);
      const slot = width / values.length;
      const barWidth = slot * 0.52;

      let bars = '';
      values.forEach((value, index) => {
        const barHeight = (value / max) * (height - paddingY * 2);
        const x = index * slot + (slot - barWidth) / 2;
        const y = height - paddingY - barHeight;
        const accent = index === values.length - 1 ? ' accent' : '';
        bars += `<rect class="bar${accent}" x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${barWidth.toFixed(1)}" height="${Math.max(barHeight, 2).toFixed(1)}" rx="6" />`;
        bars += `<text class="bar-label" x="${(index * slot + slot / 2).toFixed(1)}" y="${height - 8}">${labels[index]}</text>`;
      });
      chartEl.innerHTML = bars;
    };

    const updateMetricsUI = () => {
      byId('streakNumber').textContent = metrics.streak;
      byId('stepsNumber').textContent = metrics.steps_display;
      byId('percentile').textContent = metrics.percentile_display;
      byId('caloriesNumber').textContent = metrics.calories_display;
      byId('distanceNumber').textContent = metrics.distance;
      byId('activeMinutesNumber').textContent = metrics.active_minutes;
      renderDots(metrics.filled_slots);
      renderChart();
    };

    const updateProfileUI = () => {
      byId('profileName').textContent = profile.name;
      byId('profileAge').textContent = profile.age_display;
      byId('profileEducation').textContent = profile.education;
      byId('profileAvatar').textContent = profile.initial;
      byId('profileBtn').textContent = profile.initial;
    };

    const commit = async (url, payload) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    byId('saveStreakBtn').addEventListener('click', async () => {
      const value = parseInt(byId('streakInput').value, 10);
      if (Number.isNaN(value) || value < 0 || value > 30) {
        setError('streakError', 'Enter a number from 0 to 30.');
        return;
      }
      try {
        metrics = await commit('/api/streak', { streak: value });
        updateMetricsUI();
        setError('streakError', '');
        closeModal('streakModal');
      } catch (err) {
        setError('streakError', err.message);
      }
    });

    byId('saveStepsBtn').addEventListener('click', async () => {
      const steps = parseInt(byId('stepsInput').value, 10);
      const percentile = parseInt(byId('percentileInput').value, 10);
      if (Number.isNaN(steps) || steps < 0 || Number.isNaN(percentile) || percentile < 0 || percentile > 100) {
        setError('stepsError', 'Steps must be >= 0 and percentile 0-100.');
        return;
      }
      try {
        metrics = await commit('/api/steps', { steps, percentile });
        updateMetricsUI();
        setError('stepsError', '');
        closeModal('stepsModal');
      } catch (err) {
        setError('stepsError', err.message);
      }
    });

    byId('saveActivityBtn').addEventListener('click', async () => {
      const inputs = Array.from(document.querySelectorAll('#activityInputs input'));
      const activity = inputs.map((input) => parseInt(input.value, 10));
      if (activity.some((value) => Number.isNaN(value) || value < 0)) {
        setError('activityError', 'Every day needs a number >= 0.');
        return;
      }
      try {
        metrics = await commit('/api/activity', { activity });
        updateMetricsUI();
        setError('activityError', '');
        closeModal('activityModal');
      } catch (err) {
        setError('activityError', err.message);
      }
    });

    byId('saveProfileBtn').addEventListener('click', async () => {
      const name = byId('editProfileName').value.trim();
      const age = parseInt(byId('editProfileAge').value, 10);
      const education = byId('editProfileEducation').value.trim();
      if (!name || !education || Number.isNaN(age) || age < 1) {
        setError('profileError', 'All fields are required; age must be at least 1.');
        return;
      }
      try {
        profile = await commit('/api/profile', { name, age, education });
        updateProfileUI();
        setError('profileError', '');
        closeModal('editProfileModal');
      } catch (err) {
        setError('profileError', err.message);
      }
    });

    byId('saveCardBtn').addEventListener('click', async () => {
      const payload = {
        name: byId('customStatName').value.trim(),
        value: byId('customStatValue').value.trim(),
        unit: byId('customStatUnit').value.trim(),
        icon: byId('customStatIcon').value
      };
      if (!payload.name || !payload.value) {
        setError('cardError', 'Name and value are required.');
        return;
      }
      try {
        const card = await commit('/api/cards', payload);
        const el = document.createElement('div');
        el.className = 'stat card custom';
        const head = document.createElement('div');
        head.className = 'card-head';
        const glyph = document.createElement('span');
        glyph.className = 'glyph';
        glyph.textContent = card.glyph;
        const label = document.createElement('span');
        label.className = 'label';
        label.textContent = card.name;
        head.append(glyph, label);
        const value = document.createElement('span');
        value.className = 'value';
        value.textContent = card.value;
        const unit = document.createElement('span');
        unit.className = 'unit';
        unit.textContent = card.unit;
        el.append(head, value, unit);
        byId('additionalStats').insertBefore(el, byId('addCardBtn'));
        byId('customStatName').value = '';
        byId('customStatValue').value = '';
        byId('customStatUnit').value = '';
        setError('cardError', '');
        closeModal('customStatModal');
      } catch (err) {
        setError('cardError', err.message);
      }
    });

    // Dialogs prefill from current raw state, not from display text.
    document.querySelectorAll('[data-modal]').forEach((button) => {
      button.addEventListener('click', () => {
        const id = button.dataset.modal;
        if (id === 'streakModal') {
          byId('streakInput').value = metrics.streak;
        } else if (id === 'stepsModal') {
          byId('stepsInput').value = metrics.steps;
          byId('percentileInput').value = metrics.percentile;
        } else if (id === 'activityModal') {
          const grid = byId('activityInputs');
          grid.innerHTML = '';
          labels.forEach((label, index) => {
            const field = document.createElement('label');
            field.textContent = label;
            const input = document.createElement('input');
            input.type = 'number';
            input.min = '0';
            input.value = metrics.activity[index];
            field.appendChild(input);
            grid.appendChild(field);
          });
        }
        openModal(id);
      });
    });

    document.querySelectorAll('[data-close]').forEach((button) => {
      button.addEventListener('click', () => closeModal(button.dataset.close));
    });

    document.querySelectorAll('.modal').forEach((modal) => {
      modal.addEventListener('click', (event) => {
        if (event.target === modal) {
          modal.classList.add('hidden');
        }
      });
    });

    byId('profileBtn').addEventListener('click', () => {
      updateProfileUI();
      openModal('profileModal');
    });

    byId('editProfileBtn').addEventListener('click', () => {
      byId('editProfileName').value = profile.name;
      byId('editProfileAge').value = profile.age;
      byId('editProfileEducation').value = profile.education;
      closeModal('profileModal');
      openModal('editProfileModal');
    });

    byId('addCardBtn').addEventListener('click', () => openModal('customStatModal'));

    renderChart();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IconId;

    #[test]
    fn dots_fill_matches_streak() {
        let rendered = render_dots(14);
        assert_eq!(rendered.matches("dot filled").count(), 14);
        assert_eq!(rendered.matches("class=\"dot\"").count(), 16);
    }

    #[test]
    fn dots_cap_at_thirty_slots() {
        let rendered = render_dots(99);
        assert_eq!(rendered.matches("dot filled").count(), 30);
        assert_eq!(rendered.matches("dot-row").count(), 2);
    }

    #[test]
    fn weekday_labels_monday_first() {
        let labels = weekday_labels();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "Mon");
        assert_eq!(labels[6], "Sun");
    }

    #[test]
    fn index_shows_formatted_defaults() {
        let rendered = render_index(&AppData::default(), "2026-08-25");
        assert!(rendered.contains("10k"));
        assert!(rendered.contains("86%"));
        assert!(rendered.contains("2,450"));
        assert!(rendered.contains("2026-08-25"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn profile_strings_are_escaped() {
        let mut data = AppData::default();
        data.profile.name = "<script>alert(1)</script>".to_string();
        let rendered = render_index(&data, "2026-08-25");
        assert!(!rendered.contains("<script>alert"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn custom_cards_render_with_glyph() {
        let cards = vec![CustomCard {
            name: "Hydration".to_string(),
            value: "2.1".to_string(),
            unit: "liters".to_string(),
            icon: IconId::Water,
        }];
        let rendered = render_cards(&cards);
        assert!(rendered.contains("Hydration"));
        assert!(rendered.contains(IconId::Water.glyph()));
    }
}
