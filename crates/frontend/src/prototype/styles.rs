//! Styles the prototype page injects at start-up.

pub const DEMO_STYLES: &str = r#"
.hover-effect { background-color: rgba(255, 255, 255, 0.1); }
.search-focus { box-shadow: 0 0 0 2px var(--primary-color); }
.card-hover { transform: translateY(-5px); box-shadow: var(--shadow-md); }
.card-active { transform: translateY(-2px); box-shadow: var(--shadow-sm); }
.pulse-effect { animation: pulse 1.5s infinite; }
.float-effect { animation: float 1.5s infinite; }
@keyframes pulse { 0% { opacity: 1; } 50% { opacity: 0.7; } 100% { opacity: 1; } }
@keyframes float {
    0% { transform: translateY(-5px); }
    50% { transform: translateY(-8px); }
    100% { transform: translateY(-5px); }
}
"#;

pub const RESPONSIVE_STYLES: &str = r#"
.desktop-view, .tablet-view, .mobile-view { transition: max-height 0.5s ease-out; }
.tablet-menu, .mobile-menu { display: none; }
.show { display: flex !important; }
"#;

pub const TOOLTIP_STYLES: &str = r#"
.color-swatch { cursor: pointer; position: relative; }
.color-tooltip {
    position: absolute;
    top: -30px;
    left: 50%;
    transform: translateX(-50%);
    background-color: var(--dark-color);
    color: white;
    padding: 4px 8px;
    border-radius: 4px;
    font-size: 12px;
    white-space: nowrap;
    animation: fadeIn 0.3s;
}
@keyframes fadeIn {
    from { opacity: 0; transform: translateX(-50%) translateY(10px); }
    to { opacity: 1; transform: translateX(-50%) translateY(0); }
}
"#;
