//! Global CSS styles for the business card.
//!
//! Dark card stock, gold foil accent, Outfit display face.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Stock */
  --ink: #0d0d0f;
  --ink-raised: #17171b;
  --ink-border: #2a2a30;
  --paper: #f4efe3;

  /* Foil */
  --gold: #c9a962;
  --gold-soft: rgba(201, 169, 98, 0.35);
  --gold-glow: rgba(201, 169, 98, 0.18);

  /* Text */
  --text-primary: #f5f3ee;
  --text-secondary: rgba(245, 243, 238, 0.7);
  --text-muted: rgba(245, 243, 238, 0.45);

  /* Card geometry (ISO/IEC 7810 ID-1 ratio) */
  --card-width: min(560px, 88vw);
  --card-ratio: 85.6 / 53.98;
  --card-radius: 18px;

  --transition-fast: 150ms ease;
  --transition-flip: 0.8s cubic-bezier(0.4, 0.2, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  background: var(--ink);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
}

.document-root {
  font-family: var(--font-outfit), system-ui, sans-serif;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page === */
.page-root {
  position: relative;
  min-height: 100vh;
  width: 100vw;
  overflow: hidden;
}

.background-glow {
  position: fixed;
  top: 50%;
  left: 50%;
  width: 70vmax;
  height: 70vmax;
  border-radius: 50%;
  background: radial-gradient(circle, var(--gold-glow) 0%, transparent 65%);
  transform: translate(-50%, -50%);
  pointer-events: none;
  transition: transform 0.2s ease-out;
  z-index: 0;
}

.container {
  position: relative;
  z-index: 1;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

/* === Card shell === */
.card-wrapper {
  perspective: 1200px;
  width: var(--card-width);
}

.card {
  width: 100%;
  aspect-ratio: var(--card-ratio);
  transform-style: preserve-3d;
  cursor: pointer;
  will-change: transform;
}

.card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  transition: transform var(--transition-flip);
}

.card-inner.flipped {
  transform: rotateY(180deg);
}

.card-front,
.card-back {
  position: absolute;
  inset: 0;
  border-radius: var(--card-radius);
  border: 1px solid var(--ink-border);
  background:
    linear-gradient(135deg, rgba(255, 255, 255, 0.06) 0%, transparent 40%),
    linear-gradient(160deg, var(--ink-raised) 0%, var(--ink) 100%);
  box-shadow:
    0 30px 60px rgba(0, 0, 0, 0.55),
    inset 0 1px 0 rgba(255, 255, 255, 0.05);
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  padding: 6% 7%;
}

.card-back {
  transform: rotateY(180deg);
  padding: 5% 0;
}

.card-shine {
  position: absolute;
  inset: 0;
  background: linear-gradient(115deg, transparent 30%, rgba(255, 255, 255, 0.07) 45%, transparent 60%);
  pointer-events: none;
}

/* === Front === */
.card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.card-chip {
  width: 48px;
  height: 36px;
  border-radius: 7px;
  background: linear-gradient(135deg, #e3c98a 0%, var(--gold) 50%, #9c7f3f 100%);
  padding: 5px;
}

.chip-lines {
  display: flex;
  justify-content: space-between;
  height: 100%;
}

.chip-col {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  width: 28%;
}

.chip-col-center {
  justify-content: space-around;
}

.chip-col span {
  display: block;
  height: 1px;
  background: rgba(0, 0, 0, 0.35);
}

.card-logo svg {
  width: 30px;
  height: 30px;
  color: var(--gold);
}

.card-body {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
}

.card-name {
  font-size: clamp(1.1rem, 3.4vw, 1.75rem);
  font-weight: 600;
  letter-spacing: 0.12em;
}

.card-title {
  font-size: 0.9rem;
  font-weight: 300;
  color: var(--text-secondary);
  margin-top: 0.25rem;
}

.hextra-link {
  color: var(--gold);
  font-weight: 500;
  transition: opacity var(--transition-fast);
}

.hextra-link:hover {
  opacity: 0.8;
}

.card-qr {
  width: 68px;
  height: 68px;
  border-radius: 6px;
  overflow: hidden;
  background: var(--paper);
}

.card-qr .qr-code svg {
  display: block;
  width: 100%;
  height: 100%;
}

.qr-error {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  color: var(--ink);
  font-weight: 700;
}

.card-footer {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
}

.card-date {
  display: flex;
  flex-direction: column;
}

.card-date .label {
  font-size: 0.6rem;
  letter-spacing: 0.2em;
  color: var(--text-muted);
}

.card-date .value {
  font-size: 0.95rem;
  letter-spacing: 0.08em;
}

.card-social {
  display: flex;
  gap: 0.75rem;
}

.social-icon svg {
  width: 20px;
  height: 20px;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.social-icon:hover svg {
  color: var(--gold);
}

/* === Back === */
.card-back-header {
  padding: 0 7%;
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}

.contact-text {
  font-size: 0.8rem;
  font-weight: 300;
  line-height: 1.6;
  color: var(--text-secondary);
}

.copyable {
  font-weight: 600;
  color: var(--text-primary);
  cursor: copy;
  border-bottom: 1px dashed var(--gold-soft);
  transition: color var(--transition-fast);
}

.copyable:hover {
  color: var(--gold);
}

.tech-stack-header {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.tech-row {
  display: flex;
  gap: 6px;
  justify-content: flex-end;
}

.tech-icon-sm {
  width: 18px;
  height: 18px;
  opacity: 0.8;
}

.tech-icon-fallback {
  width: auto;
  font-size: 0.5rem;
  line-height: 18px;
  color: var(--text-muted);
}

.signature-strip {
  height: 44px;
  margin: 0.5rem 0;
  background: repeating-linear-gradient(
    -45deg,
    var(--paper) 0,
    var(--paper) 6px,
    #e8e0cc 6px,
    #e8e0cc 12px
  );
  display: flex;
  align-items: center;
  justify-content: flex-end;
  padding-right: 7%;
}

.cvv-box {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--ink);
}

.cvv-label {
  font-size: 0.6rem;
  letter-spacing: 0.15em;
}

.cvv-wrapper {
  position: relative;
  background: #fff;
  padding: 2px 10px;
  border-radius: 3px;
}

.cvv-value {
  font-weight: 700;
  font-style: italic;
  letter-spacing: 0.1em;
}

.cvv-seal {
  position: absolute;
  inset: 0;
  border-radius: 3px;
  background: linear-gradient(135deg, #d8d8d8 0%, #a8a8a8 50%, #cfcfcf 100%);
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
}

.seal-text {
  font-size: 0.5rem;
  font-weight: 700;
  letter-spacing: 0.15em;
  color: #555;
}

.cvv-seal.scratching {
  animation: scratch-away 0.6s ease-in forwards;
}

@keyframes scratch-away {
  0%   { opacity: 1; clip-path: inset(0 0 0 0); }
  100% { opacity: 0; clip-path: inset(0 0 0 100%); }
}

.card-back-footer {
  padding: 0 7%;
}

.card-back-text p {
  font-size: 0.72rem;
  font-weight: 300;
  line-height: 1.55;
  color: var(--text-secondary);
}

.highlight {
  color: var(--gold);
  font-weight: 500;
}
"#;
