//! Global CSS styles for Al-Majlis.
//!
//! Colors come from the custom properties emitted by `accent_styles`.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Noto Naskh Arabic', 'Tajawal', 'Segoe UI', sans-serif;
  background: var(--sand);
  color: var(--ink);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Layout === */
.page {
  max-width: 1080px;
  margin: 0 auto;
  padding: 3rem 1.5rem 4rem;
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.hero {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 1.5rem;
}

@media (max-width: 820px) {
  .hero {
    grid-template-columns: 1fr;
  }
}

/* === Hero Card === */
.hero-card {
  background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
  color: #fff;
  border-radius: 24px;
  padding: 2.5rem;
  box-shadow: 0 20px 50px var(--accent-glow);
  transition: background 300ms ease, box-shadow 300ms ease;
}

.hero-card .eyebrow {
  font-size: 0.9rem;
  letter-spacing: 0.08em;
  opacity: 0.85;
}

.hero-card h1 {
  font-size: 2.4rem;
  line-height: 1.3;
  margin: 0.5rem 0 1rem;
}

.hero-card .lead {
  font-size: 1.1rem;
  opacity: 0.92;
}

.time-note {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 2rem;
  padding: 0.9rem 1.2rem;
  border-radius: 16px;
  background: rgba(255, 255, 255, 0.15);
}

.time-note strong {
  display: block;
  font-size: 1.4rem;
}

/* === Vibe Panel === */
.vibe-panel {
  background: #fff;
  border: 1px solid var(--sand-deep);
  border-radius: 24px;
  padding: 1.75rem;
}

.vibe-panel h2 {
  font-size: 1.25rem;
}

.vibe-desc {
  color: var(--ink-soft);
  font-size: 0.95rem;
  margin: 0.5rem 0 1.25rem;
}

.vibe-options {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.vibe-button {
  text-align: start;
  font: inherit;
  color: var(--ink);
  background: var(--sand);
  border: 2px solid transparent;
  border-radius: 16px;
  padding: 0.9rem 1rem;
  cursor: pointer;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  transition: border-color 150ms ease, box-shadow 150ms ease;
}

.vibe-button span {
  color: var(--ink-soft);
  font-size: 0.9rem;
}

.vibe-button:hover {
  border-color: var(--accent-to);
}

.vibe-button.is-active {
  border-color: var(--accent-from);
  box-shadow: 0 8px 24px var(--accent-glow);
}

/* === Greeting Grid === */
.grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
  gap: 1.25rem;
}

.card {
  background: #fff;
  border: 1px solid var(--sand-deep);
  border-radius: 20px;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.card .dialect {
  color: var(--ink-soft);
  font-size: 0.85rem;
}

.card h3 {
  font-size: 1.6rem;
}

.meta {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.meta dt {
  font-size: 0.8rem;
  color: var(--ink-soft);
}

.meta dd {
  font-size: 0.95rem;
}

.card footer {
  display: flex;
  gap: 0.5rem;
  margin-top: auto;
}

.tag {
  font-size: 0.8rem;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  background: var(--sand-deep);
}

/* === Call To Action === */
.cta {
  text-align: center;
  background: #fff;
  border: 1px solid var(--sand-deep);
  border-radius: 24px;
  padding: 2.5rem 1.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.cta p {
  color: var(--ink-soft);
  max-width: 560px;
}

.share-button {
  font: inherit;
  font-size: 1.05rem;
  color: #fff;
  border: none;
  border-radius: 999px;
  padding: 0.85rem 2.2rem;
  cursor: pointer;
  background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
  box-shadow: 0 10px 30px var(--accent-glow);
  transition: transform 150ms ease, box-shadow 150ms ease;
}

.share-button:hover {
  transform: translateY(-2px);
}

.share-button.is-pending {
  opacity: 0.6;
  cursor: progress;
  transform: none;
}

.share-notice {
  font-size: 0.9rem;
  color: #a23b2a;
}
"#;
