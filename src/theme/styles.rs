//! Global CSS styles for the invitation book.
//!
//! Leaves turn around their left edge; `.flipped` rotates a leaf half a
//! turn and the transition length matches the navigator's flip lock.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --saffron: #e08a1e;
  --maroon: #7a1f1f;
  --maroon-deep: #4a1010;
  --gold: #c9a227;
  --gold-glow: rgba(201, 162, 39, 0.35);
  --paper: #fdf6e3;
  --paper-shade: #f1e4c3;
  --ink: #3b2a1a;
  --ink-muted: rgba(59, 42, 26, 0.65);

  --font-mm: 'Padauk', 'Noto Sans Myanmar', 'Myanmar Text', sans-serif;
  --font-en: 'Cormorant Garamond', Georgia, serif;

  --flip-duration: 600ms;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: radial-gradient(circle at center, var(--maroon) 0%, var(--maroon-deep) 100%);
  color: var(--ink);
  font-family: var(--font-mm);
  overflow: hidden;
  user-select: none;
}

.book-loading {
  display: flex;
  height: 100vh;
  align-items: center;
  justify-content: center;
  color: var(--gold);
  font-size: 1.25rem;
}

/* === Stage === */
.book-stage {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  height: 100vh;
  gap: 1.5rem;
  outline: none;
}

.fallback-note {
  position: fixed;
  top: 0.75rem;
  right: 1rem;
  font-size: 0.75rem;
  color: var(--paper-shade);
  opacity: 0.7;
}

/* === Book === */
.book {
  position: relative;
  width: min(420px, 44vw);
  height: min(600px, 78vh);
  margin-left: min(420px, 44vw);
  perspective: 2000px;
}

.page {
  position: absolute;
  inset: 0;
  transform-origin: left center;
  transform-style: preserve-3d;
  transition: transform var(--flip-duration) cubic-bezier(0.4, 0, 0.2, 1);
  cursor: pointer;
}

.page.flipped {
  transform: rotateY(-180deg);
}

.page-front,
.page-back {
  position: absolute;
  inset: 0;
  backface-visibility: hidden;
  background-color: var(--paper);
  background-size: cover;
  background-position: center;
  border: 2px solid var(--gold);
  border-radius: 0 8px 8px 0;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
  overflow: hidden;
}

.page-back {
  transform: rotateY(180deg);
  border-radius: 8px 0 0 8px;
}

.page-content {
  height: 100%;
  padding: 2rem 1.75rem;
  overflow-y: auto;
  background: linear-gradient(rgba(253, 246, 227, 0.88), rgba(253, 246, 227, 0.88));
}

/* === Cover === */
.cover {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  height: 100%;
  text-align: center;
  gap: 1rem;
}

.event-title {
  color: var(--maroon);
  font-size: 1.9rem;
  line-height: 1.6;
}

.event-subtitle {
  font-family: var(--font-en);
  color: var(--saffron);
  font-size: 1.4rem;
  font-style: italic;
}

.event-family,
.event-year {
  color: var(--ink-muted);
}

/* === Text pages === */
.invitation,
.rsvp {
  display: flex;
  flex-direction: column;
  justify-content: center;
  height: 100%;
  gap: 1.5rem;
  text-align: center;
  line-height: 1.9;
}

.text-en {
  font-family: var(--font-en);
  font-size: 1.15rem;
}

.blessing {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  text-align: center;
  font-size: 1.2rem;
  line-height: 2;
  color: var(--maroon);
}

/* === Ceremonies === */
.ceremony-list {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.ceremony-block-mm,
.ceremony-block-en {
  border-bottom: 1px solid var(--gold-glow);
  padding-bottom: 1rem;
}

.ceremony-block-en {
  font-family: var(--font-en);
}

.ceremony-label-mm,
.ceremony-label-en {
  color: var(--maroon);
  margin-bottom: 0.5rem;
}

.ceremony-image {
  width: 100%;
  max-height: 140px;
  object-fit: cover;
  border-radius: 6px;
  margin-bottom: 0.5rem;
}

.ceremony-details-mm p,
.ceremony-details-en p {
  font-size: 0.9rem;
  color: var(--ink-muted);
}

/* === Contact === */
.contact-value {
  font-size: 1.3rem;
  color: var(--maroon);
  cursor: copy;
  transition: color 150ms ease;
}

.footer-text {
  display: flex;
  align-items: flex-end;
  justify-content: center;
  height: 100%;
  color: var(--maroon);
}

/* === Navigation === */
.book-nav {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.nav-btn {
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  border: 1px solid var(--gold);
  background: transparent;
  color: var(--gold);
  font-size: 1.5rem;
  cursor: pointer;
  transition: box-shadow 150ms ease, opacity 150ms ease;
}

.nav-btn:hover:not(:disabled) {
  box-shadow: 0 0 12px var(--gold-glow);
}

.nav-btn:disabled {
  opacity: 0.3;
  cursor: default;
}

.page-indicator {
  min-width: 4rem;
  text-align: center;
  color: var(--paper-shade);
  font-family: var(--font-en);
}

@media (max-width: 768px) {
  .book {
    width: 80vw;
    height: 70vh;
    margin-left: 0;
  }
}
"#;
