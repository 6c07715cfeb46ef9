pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f8;
      --bg-2: #cfe3ef;
      --ink: #22303a;
      --accent: #3f8efc;
      --accent-2: #2d7a4b;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(34, 48, 58, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f0f6 60%, #f2f7fa 100%);
      color: var(--ink);
      font-family: 'Space Grotesk', 'Trebuchet MS', sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: 'Fraunces', 'Georgia', serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6b76;
      font-size: 1rem;
    }

    .add-form {
      display: flex;
      gap: 10px;
    }

    .add-form input {
      flex: 1;
      border: 1px solid rgba(34, 48, 58, 0.18);
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-family: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-add {
      background: var(--accent);
      color: white;
    }

    .habit {
      background: white;
      border: 2px solid rgba(34, 48, 58, 0.1);
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 12px;
    }

    .habit.done {
      border-color: var(--accent-2);
    }

    .habit-head {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    .habit-name {
      font-size: 1.15rem;
      font-weight: 600;
      margin: 0;
    }

    .habit-meta {
      color: #5c6b76;
      font-size: 0.9rem;
    }

    .habit-meta .streak {
      color: #c65a11;
      font-weight: 600;
    }

    .habit-actions {
      display: flex;
      gap: 10px;
    }

    .btn-toggle {
      flex: 1;
      background: var(--accent);
      color: white;
    }

    .habit.done .btn-toggle {
      background: var(--accent-2);
    }

    .btn-delete {
      background: transparent;
      color: var(--danger);
      border: 1px solid rgba(198, 59, 43, 0.4);
    }

    .empty {
      text-align: center;
      color: #5c6b76;
      padding: 32px 0;
    }

    .status {
      font-size: 0.95rem;
      color: #5c6b76;
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: var(--danger);
    }

    .hint {
      margin: 0;
      color: #6f7a83;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Build daily habits and keep your streaks alive.</p>
    </header>

    <form class="add-form" id="add-form">
      <input id="habit-name" placeholder="e.g., Morning meditation" autocomplete="off" />
      <button class="btn-add" type="submit">Add habit</button>
    </form>

    <section id="habits"></section>

    <div class="status" id="status"></div>
    <p class="hint">Days roll over at midnight UTC. A streak only counts while today is part of it.</p>
  </main>

  <script>
    const listEl = document.getElementById('habits');
    const statusEl = document.getElementById('status');
    const formEl = document.getElementById('add-form');
    const nameEl = document.getElementById('habit-name');

    const DAY_MS = 24 * 60 * 60 * 1000;

    const isoDay = (date) => date.toISOString().slice(0, 10);

    const streakOf = (habit) => {
      const done = new Set(habit.completions || []);
      let run = 0;
      const day = new Date();
      while (done.has(isoDay(day))) {
        run += 1;
        day.setUTCDate(day.getUTCDate() - 1);
      }
      return run;
    };

    const rateOf = (habit) => {
      const created = new Date(habit.created_at);
      const createdDay = Date.UTC(created.getUTCFullYear(), created.getUTCMonth(), created.getUTCDate());
      const now = new Date();
      const todayDay = Date.UTC(now.getUTCFullYear(), now.getUTCMonth(), now.getUTCDate());
      const tracked = Math.max(Math.floor((todayDay - createdDay) / DAY_MS) + 1, 1);
      return Math.min(Math.round(((habit.completions || []).length / tracked) * 100), 100);
    };

    const doneToday = (habit) => (habit.completions || []).includes(isoDay(new Date()));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      text.replace(/[&<>]/g, (ch) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;' }[ch]));

    const render = (habits) => {
      if (!habits.length) {
        listEl.innerHTML = '<div class="empty">No habits yet. Start building healthy routines!</div>';
        return;
      }

      listEl.innerHTML = habits
        .map((habit) => {
          const done = doneToday(habit);
          return `
            <article class="habit ${done ? 'done' : ''}">
              <div class="habit-head">
                <h3 class="habit-name">${escapeHtml(habit.name)}</h3>
                <span class="habit-meta"><span class="streak">${streakOf(habit)}</span> day streak &middot; ${rateOf(habit)}%</span>
              </div>
              <div class="habit-actions">
                <button class="btn-toggle" data-toggle="${habit.id}">${done ? 'Completed today' : 'Mark as done'}</button>
                <button class="btn-delete" data-delete="${habit.id}">Delete</button>
              </div>
            </article>`;
        })
        .join('');
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res;
    };

    const refresh = async () => {
      const res = await request('/api/habits');
      render(await res.json());
    };

    formEl.addEventListener('submit', (event) => {
      event.preventDefault();
      const name = nameEl.value;
      if (!name.trim()) {
        setStatus('Please enter a habit name', 'error');
        return;
      }
      request('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name })
      })
        .then(() => {
          nameEl.value = '';
          setStatus('');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    listEl.addEventListener('click', (event) => {
      const toggleId = event.target.dataset.toggle;
      const deleteId = event.target.dataset.delete;
      if (toggleId) {
        request(`/api/habits/${toggleId}/toggle`, { method: 'POST' })
          .then(() => refresh())
          .catch((err) => setStatus(err.message, 'error'));
      } else if (deleteId) {
        request(`/api/habits/${deleteId}`, { method: 'DELETE' })
          .then(() => refresh())
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
