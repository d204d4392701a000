use axum::response::Html;

const DASHBOARD_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Event Manager</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
            background: #f5f7fa;
            min-height: 100vh;
            padding: 24px;
            color: #1a202c;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: white;
            padding: 24px 32px;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.06);
            margin-bottom: 24px;
            border: 1px solid #e2e8f0;
        }
        h1 {
            color: #2d3748;
            font-size: 24px;
            font-weight: 600;
            margin-bottom: 4px;
            letter-spacing: -0.025em;
        }
        h2 {
            font-size: 18px;
            font-weight: 600;
            color: #2d3748;
            margin: 24px 0 16px;
        }
        .subtitle { color: #718096; font-size: 14px; }
        .btn {
            border: none;
            border-radius: 6px;
            padding: 8px 16px;
            font-size: 14px;
            font-weight: 500;
            cursor: pointer;
        }
        .btn-primary { background: #3182ce; color: white; }
        .btn-primary:disabled { background: #90cdf4; cursor: default; }
        .btn-danger { background: #e53e3e; color: white; }
        .btn-ghost { background: transparent; color: #4a5568; }
        .search {
            width: 100%;
            padding: 12px 16px;
            border: 1px solid #e2e8f0;
            border-radius: 8px;
            font-size: 14px;
            margin-bottom: 24px;
        }
        .stats {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 16px;
            margin-bottom: 8px;
        }
        .stat {
            background: white;
            border: 1px solid #e2e8f0;
            border-radius: 8px;
            padding: 20px;
        }
        .stat-label { font-size: 13px; color: #718096; }
        .stat-value { font-size: 24px; font-weight: 700; color: #2d3748; }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 16px;
        }
        .card {
            background: white;
            border: 1px solid #e2e8f0;
            border-left: 4px solid #a0aec0;
            border-radius: 8px;
            padding: 16px;
        }
        .card.upcoming { border-left-color: #38a169; }
        .card-title { font-size: 16px; font-weight: 600; margin-bottom: 6px; }
        .card-desc { font-size: 13px; color: #4a5568; margin-bottom: 10px; }
        .card-meta { font-size: 13px; color: #2d3748; line-height: 1.6; }
        .card-actions { margin-top: 12px; display: flex; gap: 8px; }
        .badge {
            display: inline-block;
            padding: 2px 8px;
            border-radius: 4px;
            font-size: 11px;
            font-weight: 500;
            text-transform: uppercase;
            margin-bottom: 8px;
        }
        .badge-upcoming { background: #c6f6d5; color: #22543d; }
        .badge-past { background: #edf2f7; color: #4a5568; }
        .empty { text-align: center; padding: 48px; color: #718096; }
        .modal-backdrop {
            position: fixed;
            inset: 0;
            background: rgba(26, 32, 44, 0.5);
            display: none;
            align-items: center;
            justify-content: center;
        }
        .modal-backdrop.open { display: flex; }
        .modal {
            background: white;
            border-radius: 8px;
            padding: 24px;
            width: 560px;
            max-width: 95vw;
        }
        .field { margin-bottom: 14px; }
        .field label { display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px; }
        .field input, .field textarea {
            width: 100%;
            padding: 8px 10px;
            border: 1px solid #cbd5e0;
            border-radius: 6px;
            font-size: 14px;
            font-family: inherit;
        }
        .field.invalid input, .field.invalid textarea { border-color: #e53e3e; }
        .field-error { color: #e53e3e; font-size: 12px; margin-top: 4px; min-height: 14px; }
        .modal-actions { display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px; }
        .toasts { position: fixed; bottom: 24px; right: 24px; display: flex; flex-direction: column; gap: 8px; }
        .toast {
            padding: 10px 16px;
            border-radius: 6px;
            color: white;
            font-size: 14px;
            box-shadow: 0 2px 6px rgba(0,0,0,0.15);
        }
        .toast-success { background: #38a169; }
        .toast-error { background: #e53e3e; }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <div>
                <h1>Event Manager</h1>
                <div class="subtitle">Organize and manage your events with ease</div>
            </div>
            <button class="btn btn-primary" id="create-button">Create Event</button>
        </header>

        <input class="search" id="search" placeholder="Search events by title, description, or venue...">

        <div class="stats">
            <div class="stat"><div class="stat-label">Total Events</div><div class="stat-value" id="stat-total">0</div></div>
            <div class="stat"><div class="stat-label">Upcoming</div><div class="stat-value" id="stat-upcoming">0</div></div>
            <div class="stat"><div class="stat-label">Venues</div><div class="stat-value" id="stat-venues">0</div></div>
        </div>

        <div id="content"><div class="empty">Loading events...</div></div>
    </div>

    <div class="modal-backdrop" id="form-modal">
        <div class="modal">
            <h2 id="form-title">Create New Event</h2>
            <form id="event-form" novalidate>
                <div class="field" data-field="title">
                    <label for="f-title">Event Title</label>
                    <input id="f-title" name="title" placeholder="Enter event title">
                    <div class="field-error"></div>
                </div>
                <div class="field" data-field="description">
                    <label for="f-description">Description</label>
                    <textarea id="f-description" name="description" rows="4" placeholder="Describe your event"></textarea>
                    <div class="field-error"></div>
                </div>
                <div class="field" data-field="venue">
                    <label for="f-venue">Venue</label>
                    <input id="f-venue" name="venue" placeholder="Event venue or location">
                    <div class="field-error"></div>
                </div>
                <div class="field" data-field="date">
                    <label for="f-date">Date</label>
                    <input id="f-date" name="date" type="date">
                    <div class="field-error"></div>
                </div>
                <div class="field" data-field="time">
                    <label for="f-time">Time</label>
                    <input id="f-time" name="time" type="time">
                    <div class="field-error"></div>
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn btn-ghost" id="form-cancel">Cancel</button>
                    <button type="submit" class="btn btn-primary" id="form-submit">Create Event</button>
                </div>
            </form>
        </div>
    </div>

    <div class="modal-backdrop" id="confirm-modal">
        <div class="modal">
            <h2>Delete event</h2>
            <p>Are you sure you want to delete this event?</p>
            <div class="modal-actions">
                <button class="btn btn-ghost" id="confirm-cancel">Cancel</button>
                <button class="btn btn-danger" id="confirm-delete">Delete</button>
            </div>
        </div>
    </div>

    <div class="toasts" id="toasts"></div>

    <script>
        const FIELDS = ['title', 'description', 'venue', 'date', 'time'];

        const state = {
            events: [],
            loading: true,
            query: '',
            editing: null,
            pendingDelete: null,
            submitting: false,
        };

        function escapeHtml(value) {
            return String(value)
                .replace(/&/g, '&amp;')
                .replace(/</g, '&lt;')
                .replace(/>/g, '&gt;')
                .replace(/"/g, '&quot;')
                .replace(/'/g, '&#39;');
        }

        function toast(message, level) {
            const el = document.createElement('div');
            el.className = `toast toast-${level}`;
            el.textContent = message;
            document.getElementById('toasts').appendChild(el);
            setTimeout(() => el.remove(), 4000);
        }

        async function errorMessage(response, fallback) {
            try {
                const body = await response.json();
                return body.error || fallback;
            } catch (_) {
                return fallback;
            }
        }

        function filterEvents(events, query) {
            const q = query.trim().toLowerCase();
            if (!q) return events;
            return events.filter(e =>
                e.title.toLowerCase().includes(q) ||
                e.description.toLowerCase().includes(q) ||
                e.venue.toLowerCase().includes(q)
            );
        }

        function isUpcoming(event, now) {
            const t = Date.parse(event.date);
            return !Number.isNaN(t) && t >= now;
        }

        function formatDate(date) {
            const t = Date.parse(date);
            if (Number.isNaN(t)) return date;
            return new Date(t).toLocaleDateString(undefined, { year: 'numeric', month: 'long', day: 'numeric', timeZone: 'UTC' });
        }

        function render() {
            const content = document.getElementById('content');
            if (state.loading) return;

            const now = Date.now();
            const visible = filterEvents(state.events, state.query);
            const upcoming = visible.filter(e => isUpcoming(e, now));
            const past = visible.filter(e => !isUpcoming(e, now));

            document.getElementById('stat-total').textContent = state.events.length;
            document.getElementById('stat-upcoming').textContent = upcoming.length;
            document.getElementById('stat-venues').textContent = new Set(state.events.map(e => e.venue)).size;

            if (visible.length === 0) {
                content.innerHTML = state.query.trim()
                    ? '<div class="empty"><h2>No events found</h2><p>Try adjusting your search criteria</p></div>'
                    : '<div class="empty"><h2>No events yet</h2><p>Create your first event to get started</p></div>';
                return;
            }

            content.innerHTML = '';
            if (upcoming.length > 0) content.appendChild(section('Upcoming Events', upcoming, true));
            if (past.length > 0) content.appendChild(section('Past Events', past, false));
        }

        function section(title, events, upcoming) {
            const wrapper = document.createElement('div');
            wrapper.innerHTML = `<h2>${title}</h2><div class="grid"></div>`;
            const grid = wrapper.querySelector('.grid');
            events.forEach(e => grid.appendChild(card(e, upcoming)));
            return wrapper;
        }

        function card(event, upcoming) {
            const el = document.createElement('div');
            el.className = upcoming ? 'card upcoming' : 'card';
            el.innerHTML = `
                <span class="badge ${upcoming ? 'badge-upcoming' : 'badge-past'}">${upcoming ? 'Upcoming' : 'Past'}</span>
                <div class="card-title">${escapeHtml(event.title)}</div>
                <div class="card-desc">${escapeHtml(event.description)}</div>
                <div class="card-meta">
                    <div>${escapeHtml(formatDate(event.date))}</div>
                    <div>${escapeHtml(event.time)}</div>
                    <div>${escapeHtml(event.venue)}</div>
                </div>
                <div class="card-actions">
                    <button class="btn btn-ghost" data-action="edit">Edit</button>
                    <button class="btn btn-ghost" data-action="delete">Delete</button>
                </div>
            `;
            el.querySelector('[data-action="edit"]').onclick = () => openForm(event);
            el.querySelector('[data-action="delete"]').onclick = () => requestDelete(event.id);
            return el;
        }

        async function loadEvents() {
            try {
                const response = await fetch('/api/events');
                if (!response.ok) throw new Error('Failed to fetch events');
                state.events = await response.json();
            } catch (err) {
                console.error('Error fetching events:', err);
                toast('Failed to load events', 'error');
            } finally {
                state.loading = false;
                render();
            }
        }

        function parseCalendarDate(value) {
            const match = /^(\d{4})-(\d{2})-(\d{2})$/.exec(value.trim());
            if (!match) return null;
            const [year, month, day] = match.slice(1).map(Number);
            const date = new Date(year, month - 1, day);
            if (date.getFullYear() !== year || date.getMonth() !== month - 1 || date.getDate() !== day) return null;
            return date;
        }

        function validate(data) {
            const errors = {};

            if (!data.title.trim()) errors.title = 'Title is required';
            else if (data.title.length < 3) errors.title = 'Title must be at least 3 characters';

            if (!data.description.trim()) errors.description = 'Description is required';
            else if (data.description.length < 10) errors.description = 'Description must be at least 10 characters';

            if (!data.venue.trim()) errors.venue = 'Venue is required';

            if (!data.date) {
                errors.date = 'Date is required';
            } else {
                const selected = parseCalendarDate(data.date);
                const today = new Date();
                today.setHours(0, 0, 0, 0);
                if (!selected) errors.date = 'Date must be a valid calendar date';
                else if (selected < today) errors.date = 'Date cannot be in the past';
            }

            if (!data.time) errors.time = 'Time is required';

            return errors;
        }

        function showErrors(errors) {
            FIELDS.forEach(name => setFieldError(name, errors[name]));
        }

        function setFieldError(name, message) {
            const field = document.querySelector(`.field[data-field="${name}"]`);
            field.classList.toggle('invalid', !!message);
            field.querySelector('.field-error').textContent = message || '';
        }

        function readForm() {
            const data = {};
            FIELDS.forEach(name => { data[name] = document.getElementById(`f-${name}`).value; });
            return data;
        }

        function openForm(event) {
            state.editing = event || null;
            FIELDS.forEach(name => { document.getElementById(`f-${name}`).value = event ? event[name] : ''; });
            showErrors({});
            document.getElementById('form-title').textContent = event ? 'Edit Event' : 'Create New Event';
            document.getElementById('form-submit').textContent = event ? 'Update Event' : 'Create Event';
            document.getElementById('form-modal').classList.add('open');
        }

        function closeForm() {
            state.editing = null;
            document.getElementById('form-modal').classList.remove('open');
        }

        async function submitForm(e) {
            e.preventDefault();
            if (state.submitting) return;

            const data = readForm();
            const errors = validate(data);
            showErrors(errors);
            if (Object.keys(errors).length > 0) return;

            const editing = state.editing;
            const fallback = editing ? 'Failed to update event' : 'Failed to create event';
            const submit = document.getElementById('form-submit');
            state.submitting = true;
            submit.disabled = true;
            submit.textContent = 'Saving...';

            try {
                const response = await fetch(editing ? `/api/events/${encodeURIComponent(editing.id)}` : '/api/events', {
                    method: editing ? 'PUT' : 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(data),
                });
                if (!response.ok) throw new Error(await errorMessage(response, fallback));

                const saved = await response.json();
                if (editing) {
                    state.events = state.events.map(ev => ev.id === editing.id ? saved : ev);
                    toast('Event updated successfully', 'success');
                } else {
                    state.events = [...state.events, saved];
                    toast('Event created successfully', 'success');
                }
                closeForm();
                render();
            } catch (err) {
                console.error('Error saving event:', err);
                toast(err.message || fallback, 'error');
            } finally {
                state.submitting = false;
                submit.disabled = false;
                submit.textContent = state.editing ? 'Update Event' : 'Create Event';
            }
        }

        function requestDelete(id) {
            state.pendingDelete = id;
            document.getElementById('confirm-modal').classList.add('open');
        }

        function cancelDelete() {
            state.pendingDelete = null;
            document.getElementById('confirm-modal').classList.remove('open');
        }

        async function confirmDelete() {
            const id = state.pendingDelete;
            cancelDelete();
            if (!id) return;

            try {
                const response = await fetch(`/api/events/${encodeURIComponent(id)}`, { method: 'DELETE' });
                if (!response.ok) throw new Error(await errorMessage(response, 'Failed to delete event'));
                state.events = state.events.filter(ev => ev.id !== id);
                toast('Event deleted successfully', 'success');
                render();
            } catch (err) {
                console.error('Error deleting event:', err);
                toast(err.message || 'Failed to delete event', 'error');
            }
        }

        FIELDS.forEach(name => {
            document.getElementById(`f-${name}`).addEventListener('input', () => setFieldError(name, null));
        });
        document.getElementById('search').addEventListener('input', e => { state.query = e.target.value; render(); });
        document.getElementById('create-button').onclick = () => openForm(null);
        document.getElementById('form-cancel').onclick = closeForm;
        document.getElementById('event-form').addEventListener('submit', submitForm);
        document.getElementById('confirm-cancel').onclick = cancelDelete;
        document.getElementById('confirm-delete').onclick = confirmDelete;

        loadEvents();
    </script>
</body>
</html>
"#;

pub async fn dashboard_handler() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
