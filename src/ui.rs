use crate::store::date_key;
use chrono::NaiveDate;

pub fn render_page(today: NaiveDate) -> String {
    let key = date_key(today);
    INDEX_HTML.replace("{{TODAY}}", &key)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Plant a Tree</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6ea;
      --bg-2: #cde8c5;
      --ink: #27302a;
      --accent: #2e7d32;
      --accent-soft: #a5d6a7;
      --muted: #6b7a6e;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(46, 125, 50, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f2de 60%, #f2f8ee 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      grid-template-columns: 1fr 1fr;
    }

    header {
      grid-column: 1 / -1;
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .panel {
      background: white;
      border-radius: 18px;
      padding: 20px;
      border: 1px solid rgba(46, 125, 50, 0.1);
      display: grid;
      gap: 14px;
      align-content: start;
    }

    .panel h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .add-row {
      display: flex;
      gap: 10px;
    }

    input[type="text"] {
      flex: 1;
      border: 1px solid rgba(46, 125, 50, 0.25);
      border-radius: 12px;
      padding: 10px 14px;
      font-size: 1rem;
      font-family: inherit;
    }

    input[type="date"] {
      border: 1px solid rgba(46, 125, 50, 0.25);
      border-radius: 12px;
      padding: 8px 12px;
      font-family: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease, opacity 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.4;
      cursor: not-allowed;
    }

    .nav-btn {
      background: transparent;
      color: var(--accent);
      padding: 6px 12px;
      font-size: 1.1rem;
    }

    .warning {
      display: none;
      color: #b3482f;
      font-size: 0.9rem;
    }

    .warning.visible {
      display: block;
    }

    .tree-status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .tree-status.planted {
      color: var(--accent);
      font-weight: 600;
    }

    ul.tasks {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .task {
      display: flex;
      align-items: center;
      gap: 10px;
      background: #f4faf2;
      border-radius: 12px;
      padding: 10px 14px;
    }

    .task.completed span {
      text-decoration: line-through;
      color: var(--muted);
    }

    .calendar-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekday {
      text-align: center;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .day {
      aspect-ratio: 1;
      border-radius: 10px;
      background: #f4faf2;
      display: grid;
      place-items: center;
      font-size: 0.9rem;
      cursor: pointer;
      border: 2px solid transparent;
      position: relative;
    }

    .day.empty {
      background: transparent;
      cursor: default;
    }

    .day.tree {
      background: var(--accent-soft);
    }

    .day.tree::after {
      content: '\1F332';
      position: absolute;
      bottom: 2px;
      right: 4px;
      font-size: 0.7rem;
    }

    .day.selected {
      border-color: var(--accent);
    }

    .banner {
      grid-column: 1 / -1;
      background: var(--accent);
      color: white;
      border-radius: 18px;
      padding: 18px 24px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .banner.hidden {
      display: none;
    }

    .banner button {
      background: white;
      color: var(--accent);
    }

    .status {
      grid-column: 1 / -1;
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #b3482f;
    }

    @media (max-width: 700px) {
      .app {
        grid-template-columns: 1fr;
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Plant a Tree</h1>
      <p class="subtitle">Finish every task in a day to plant its tree. Fill the month to grow a forest.</p>
    </header>

    <div id="forest-banner" class="banner hidden">
      <span>&#127794; You grew a whole forest this month! Every single day has its tree. &#127794;</span>
      <button id="close-banner" type="button">Close</button>
    </div>

    <section class="panel">
      <h2>Tasks</h2>
      <input type="date" id="selected-date" min="{{TODAY}}" value="{{TODAY}}" />
      <div class="add-row">
        <input type="text" id="task-input" placeholder="What needs doing?" maxlength="200" />
        <button id="add-btn" type="button">Add</button>
      </div>
      <p id="date-warning" class="warning">You can only add tasks for today or future dates.</p>
      <p id="tree-status" class="tree-status"></p>
      <ul id="task-list" class="tasks"></ul>
    </section>

    <section class="panel">
      <div class="calendar-head">
        <button class="nav-btn" id="prev-month" type="button">&#9664;</button>
        <h2 id="month-title"></h2>
        <button class="nav-btn" id="next-month" type="button">&#9654;</button>
      </div>
      <div class="calendar-grid" id="calendar"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TODAY = '{{TODAY}}';
    const MONTH_NAMES = ['January', 'February', 'March', 'April', 'May', 'June',
      'July', 'August', 'September', 'October', 'November', 'December'];
    const WEEKDAYS = ['Su', 'Mo', 'Tu', 'We', 'Th', 'Fr', 'Sa'];

    const dateInput = document.getElementById('selected-date');
    const taskInput = document.getElementById('task-input');
    const addBtn = document.getElementById('add-btn');
    const warningEl = document.getElementById('date-warning');
    const treeStatusEl = document.getElementById('tree-status');
    const taskListEl = document.getElementById('task-list');
    const calendarEl = document.getElementById('calendar');
    const monthTitleEl = document.getElementById('month-title');
    const bannerEl = document.getElementById('forest-banner');
    const statusEl = document.getElementById('status');

    let selectedDate = TODAY;
    let viewYear = Number(TODAY.slice(0, 4));
    let viewMonth = Number(TODAY.slice(5, 7));
    const forestSeen = new Set();

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderDay = (data) => {
      addBtn.disabled = data.past;
      warningEl.classList.toggle('visible', data.past);

      if (data.tasks.length === 0) {
        treeStatusEl.textContent = 'No tasks for this day. Add some to plant a tree!';
        treeStatusEl.classList.remove('planted');
      } else {
        const done = data.tasks.filter((task) => task.completed).length;
        if (done === data.tasks.length) {
          treeStatusEl.textContent = '\u{1F332} You planted a tree today! \u{1F332}';
          treeStatusEl.classList.add('planted');
        } else {
          treeStatusEl.textContent =
            `Complete all ${data.tasks.length} tasks to plant a tree (${done}/${data.tasks.length})`;
          treeStatusEl.classList.remove('planted');
        }
      }

      taskListEl.innerHTML = '';
      data.tasks.forEach((task) => {
        const li = document.createElement('li');
        li.className = 'task' + (task.completed ? ' completed' : '');

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = task.completed;
        checkbox.addEventListener('change', () => {
          toggleTask(task.id).catch((err) => setStatus(err.message, 'error'));
        });

        const span = document.createElement('span');
        span.textContent = task.text;

        li.appendChild(checkbox);
        li.appendChild(span);
        taskListEl.appendChild(li);
      });
    };

    const renderMonth = (data) => {
      monthTitleEl.textContent = `${MONTH_NAMES[data.month - 1]} ${data.year}`;
      calendarEl.innerHTML = '';

      WEEKDAYS.forEach((name) => {
        const cell = document.createElement('div');
        cell.className = 'weekday';
        cell.textContent = name;
        calendarEl.appendChild(cell);
      });

      for (let i = 0; i < data.first_weekday; i += 1) {
        const cell = document.createElement('div');
        cell.className = 'day empty';
        calendarEl.appendChild(cell);
      }

      data.days.forEach((day) => {
        const cell = document.createElement('div');
        cell.className = 'day';
        if (day.tree_planted) {
          cell.classList.add('tree');
        }
        if (day.date === selectedDate) {
          cell.classList.add('selected');
        }
        cell.textContent = day.day;
        cell.addEventListener('click', () => {
          selectedDate = day.date;
          dateInput.value = day.date;
          refresh().catch((err) => setStatus(err.message, 'error'));
        });
        calendarEl.appendChild(cell);
      });

      const monthKey = `${data.year}-${data.month}`;
      if (data.forest && !forestSeen.has(monthKey)) {
        forestSeen.add(monthKey);
        bannerEl.classList.remove('hidden');
      }
    };

    const loadDay = async () => {
      const res = await fetch(`/api/tasks?date=${selectedDate}`);
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load tasks');
      }
      renderDay(await res.json());
    };

    const loadMonth = async () => {
      const res = await fetch(`/api/month?year=${viewYear}&month=${viewMonth}`);
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load calendar');
      }
      renderMonth(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadDay(), loadMonth()]);
    };

    const addTask = async () => {
      const text = taskInput.value.trim();
      if (text === '') {
        return;
      }
      const res = await fetch('/api/tasks', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: selectedDate, text })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      renderDay(await res.json());
      taskInput.value = '';
      taskInput.focus();
      setStatus('', '');
      loadMonth().catch((err) => setStatus(err.message, 'error'));
    };

    const toggleTask = async (id) => {
      const res = await fetch('/api/tasks/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: selectedDate, id })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      renderDay(await res.json());
      loadMonth().catch((err) => setStatus(err.message, 'error'));
    };

    dateInput.addEventListener('change', () => {
      if (dateInput.value) {
        selectedDate = dateInput.value;
        viewYear = Number(selectedDate.slice(0, 4));
        viewMonth = Number(selectedDate.slice(5, 7));
        refresh().catch((err) => setStatus(err.message, 'error'));
      }
    });

    addBtn.addEventListener('click', () => {
      addTask().catch((err) => setStatus(err.message, 'error'));
    });

    taskInput.addEventListener('keypress', (event) => {
      if (event.key === 'Enter') {
        addTask().catch((err) => setStatus(err.message, 'error'));
      }
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      viewMonth -= 1;
      if (viewMonth < 1) {
        viewMonth = 12;
        viewYear -= 1;
      }
      loadMonth().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-month').addEventListener('click', () => {
      viewMonth += 1;
      if (viewMonth > 12) {
        viewMonth = 1;
        viewYear += 1;
      }
      loadMonth().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('close-banner').addEventListener('click', () => {
      bannerEl.classList.add('hidden');
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
