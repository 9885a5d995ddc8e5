/// Site-wide stylesheet, injected once by the root component.
pub const APP_STYLES: &str = r#"
:root {
    --commodity-blue: #1a365d;
    --commodity-gold: #c99a28;
    --commodity-green: #16a34a;
    --commodity-red: #dc2626;
    --border: #e5e7eb;
    --muted: #6b7280;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    color: #111827;
    background: #ffffff;
}

a { color: inherit; text-decoration: none; }

.page { min-height: 100vh; display: flex; flex-direction: column; }
.page.muted-bg { background: #f9fafb; }
.page-main { flex-grow: 1; width: 100%; max-width: 80rem; margin: 0 auto; padding: 1.5rem; }
.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }

.page-title { font-size: 1.875rem; font-weight: 700; color: var(--commodity-blue); margin: 0; }
.page-subtitle { color: #4b5563; margin: 0.25rem 0 1.5rem; }
.section-title {
    display: flex; align-items: center; gap: 0.5rem;
    font-size: 1.25rem; font-weight: 600; color: var(--commodity-blue);
}

/* navbar */
.navbar { background: #fff; border-bottom: 1px solid var(--border); position: sticky; top: 0; z-index: 50; }
.navbar-row { display: flex; justify-content: space-between; align-items: center; height: 4rem; }
.brand { color: var(--commodity-blue); font-weight: 700; font-size: 1.25rem; }
.nav-links { display: flex; align-items: center; gap: 1rem; }
.nav-link { display: flex; align-items: center; gap: 0.5rem; color: #4b5563; padding: 0.5rem 0.75rem; border-radius: 0.375rem; font-size: 0.875rem; font-weight: 500; }
.nav-link:hover { background: #f3f4f6; color: var(--commodity-blue); }
.menu-toggle { background: none; border: none; font-size: 1.5rem; color: #4b5563; cursor: pointer; }
.mobile-menu { padding: 0.5rem 1rem 0.75rem; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08); }
.mobile-menu .nav-link { font-size: 1rem; }
.mobile-actions { display: flex; flex-direction: column; gap: 0.5rem; padding-top: 1rem; border-top: 1px solid var(--border); }

/* buttons */
.btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: 0.375rem; font-weight: 500; font-size: 0.875rem; cursor: pointer; border: 1px solid transparent; }
.btn-lg { padding: 0.75rem 1.5rem; font-size: 1rem; }
.btn-sm { padding: 0.25rem 0.75rem; }
.btn-block { width: 100%; }
.btn-gold { background: var(--commodity-gold); color: #fff; }
.btn-gold:hover { background: #d97706; }
.btn-blue { background: var(--commodity-blue); color: #fff; }
.btn-outline { background: #fff; border-color: var(--border); color: #111827; }
.btn-outline-gold { background: #fff; border-color: var(--commodity-gold); color: var(--commodity-gold); }
.btn-outline-blue { background: #fff; border-color: var(--commodity-blue); color: var(--commodity-blue); }
.btn-danger { background: #dc2626; color: #fff; }
.btn-link { background: none; border: none; padding: 0; color: var(--commodity-blue); text-decoration: underline; }

/* cards, tables, badges */
.card { background: #fff; border: 1px solid var(--border); border-radius: 0.5rem; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.card:hover { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08); }
.card-header { padding: 1.25rem 1.25rem 0.5rem; }
.card-title { margin: 0; font-size: 1.125rem; font-weight: 600; display: flex; align-items: center; gap: 0.5rem; }
.card-description { margin: 0.25rem 0 0; color: var(--muted); font-size: 0.875rem; }
.card-content { padding: 1.25rem; }
.grid { display: grid; gap: 1.5rem; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
.span-2 { grid-column: span 2; }
.data-table { width: 100%; border-collapse: collapse; border: 1px solid var(--border); }
.data-table th { text-align: left; background: #f9fafb; color: var(--muted); font-weight: 500; padding: 0.75rem; }
.data-table td { padding: 0.75rem; border-top: 1px solid var(--border); }
.badge { display: inline-block; padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; }
.bg-green-100 { background: #dcfce7; } .text-green-800 { color: #166534; }
.bg-amber-100 { background: #fef3c7; } .text-amber-800 { color: #92400e; }
.bg-red-100 { background: #fee2e2; } .text-red-800 { color: #991b1b; }
.bg-blue-100 { background: #dbeafe; } .text-blue-800 { color: #1e40af; }
.text-commodity-green { color: var(--commodity-green); }
.text-commodity-red { color: var(--commodity-red); }
.text-blue-500 { color: #3b82f6; } .text-amber-500 { color: #f59e0b; }
.text-gray-500 { color: #6b7280; } .text-green-500 { color: #22c55e; }
.muted { color: var(--muted); font-size: 0.875rem; }
.trend { display: inline-flex; align-items: center; gap: 0.25rem; font-weight: 600; }

/* alerts, switches, sliders */
.alert { border: 1px solid var(--border); border-radius: 0.5rem; padding: 1rem; }
.alert-info { background: #eff6ff; border-color: #bfdbfe; color: #1e40af; }
.alert-title { font-weight: 600; margin: 0 0 0.25rem; }
.alert-row { border: 1px solid; border-radius: 0.5rem; padding: 1rem; }
.border-red-300 { border-color: #fca5a5; } .bg-red-50 { background: #fef2f2; }
.border-amber-300 { border-color: #fcd34d; } .bg-amber-50 { background: #fffbeb; }
.border-blue-300 { border-color: #93c5fd; } .bg-blue-50 { background: #eff6ff; }
.switch { position: relative; width: 2.75rem; height: 1.5rem; border-radius: 9999px; border: none; background: #d1d5db; cursor: pointer; }
.switch.on { background: var(--commodity-blue); }
.switch-thumb { position: absolute; top: 0.125rem; left: 0.125rem; width: 1.25rem; height: 1.25rem; border-radius: 9999px; background: #fff; transition: transform 0.15s; }
.switch.on .switch-thumb { transform: translateX(1.25rem); }
.setting-row { display: flex; align-items: center; justify-content: space-between; padding: 0.375rem 0; }
.slider-row { display: flex; align-items: center; gap: 1rem; }
.slider-row input { flex: 1; }

/* tabs */
.tab-strip { display: grid; grid-template-columns: repeat(4, 1fr); background: #f3f4f6; border-radius: 0.375rem; padding: 0.25rem; gap: 0.25rem; }
.tab-strip.two { grid-template-columns: repeat(2, 1fr); }
.tab { border: none; background: none; padding: 0.5rem; border-radius: 0.25rem; cursor: pointer; font-weight: 500; color: var(--muted); }
.tab.active { background: #fff; color: #111827; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08); }
.tab-panel { margin-top: 1.5rem; }
.label-short { display: none; }
@media (max-width: 640px) {
    .label-long { display: none; }
    .label-short { display: inline; }
}

/* home */
.hero { display: flex; flex-wrap: wrap; align-items: center; gap: 2.5rem; padding: 5rem 0; }
.hero-copy { flex: 1 1 24rem; }
.hero-title { font-size: 3rem; font-weight: 700; color: var(--commodity-blue); margin: 0 0 1.5rem; }
.hero-text { font-size: 1.125rem; color: #4b5563; margin-bottom: 2rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
.hero-image { flex: 1 1 24rem; border-radius: 0.5rem; overflow: hidden; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
.hero-image img { width: 100%; display: block; }
.section { padding: 4rem 0; }
.section.muted-bg { background: #f9fafb; padding: 2rem 0; }
.section-intro { text-align: center; max-width: 48rem; margin: 0 auto 3rem; color: #4b5563; }
.section-intro h2 { color: var(--commodity-blue); font-size: 1.875rem; }
.category-card { text-align: center; }
.icon { font-size: 2.5rem; }
.quote-card .card-header { background: #f9fafb; border-bottom: 1px solid var(--border); }
.quote-body { display: flex; justify-content: space-between; align-items: center; }
.quote-price { font-size: 1.5rem; font-weight: 700; margin: 0; }

/* chart */
.line-chart { width: 100%; height: auto; }
.line-chart .grid-line { stroke: #e5e7eb; stroke-dasharray: 3 3; }
.line-chart .axis-label { font-size: 11px; fill: #6b7280; }
.chart-legend { display: flex; justify-content: center; flex-wrap: wrap; gap: 1rem; font-size: 0.875rem; }
.legend-swatch { display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 2px; margin-right: 0.375rem; }
.window-picker { display: flex; gap: 0.5rem; }
.chart-empty { padding: 3rem; text-align: center; color: var(--muted); }

/* auth */
.auth-layout { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 2.5rem; padding: 3rem 1.5rem; max-width: 72rem; margin: 0 auto; }
.auth-intro { background: var(--commodity-blue); color: #fff; border-radius: 0.75rem; padding: 2.5rem; }
.auth-feature { display: flex; gap: 1rem; margin-top: 1.5rem; }
.auth-feature p { color: rgba(255, 255, 255, 0.8); margin: 0; }
.form-field { display: flex; flex-direction: column; gap: 0.375rem; margin-bottom: 1rem; }
.form-field label { font-size: 0.875rem; font-weight: 500; }
.form-field input[type=text], .form-field input[type=email], .form-field input[type=password] {
    border: 1px solid var(--border); border-radius: 0.375rem; padding: 0.5rem 0.75rem; font-size: 0.875rem;
}
.field-error { color: #dc2626; font-size: 0.8125rem; margin: 0; }
.checkbox-row { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; }
.form-row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.otp-input { letter-spacing: 0.75rem; text-align: center; font-size: 1.25rem; border: 1px solid var(--border); border-radius: 0.375rem; padding: 0.5rem; width: 100%; }
.otp-slots { display: flex; justify-content: center; gap: 0.5rem; margin: 0.75rem 0; }
.otp-slot { width: 2.5rem; height: 2.75rem; border: 1px solid var(--border); border-radius: 0.375rem; display: flex; align-items: center; justify-content: center; font-size: 1.25rem; }
.otp-slot.filled { border-color: var(--commodity-blue); }
.step-icon { display: flex; justify-content: center; font-size: 2.5rem; margin-bottom: 1rem; }
.overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); z-index: 60; display: flex; align-items: center; justify-content: center; }
.dialog { background: #fff; border-radius: 0.5rem; padding: 1.5rem; width: min(32rem, 92vw); }
.dialog-footer { display: flex; justify-content: flex-end; gap: 0.5rem; margin-top: 1.5rem; }
.upload-box { display: flex; flex-direction: column; align-items: center; border: 2px dashed #d1d5db; border-radius: 0.5rem; padding: 1.5rem; cursor: pointer; background: #f9fafb; }
.upload-box input { display: none; }
.drawer { position: fixed; left: 0; right: 0; bottom: 0; background: #fff; border-radius: 0.75rem 0.75rem 0 0; padding: 2rem; z-index: 70; text-align: center; box-shadow: 0 -10px 25px rgba(0, 0, 0, 0.15); }
.drawer-actions { display: flex; flex-direction: column; gap: 0.5rem; max-width: 24rem; margin: 1.5rem auto 0; }

/* footer */
.footer { background: var(--commodity-blue); color: #fff; padding: 3rem 0; }
.footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 2rem; }
.footer h3 { font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; color: #d1d5db; }
.footer ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.5rem; }
.footer a, .footer p { color: #d1d5db; }
.footer a:hover { color: #fff; }
.copyright { margin-top: 3rem; padding-top: 2rem; border-top: 1px solid #374151; text-align: center; font-size: 0.875rem; }

/* toasts */
.toaster { position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 100; }
.toast { background: #fff; border: 1px solid var(--border); border-radius: 0.5rem; padding: 0.75rem 1rem; width: 22rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); display: flex; justify-content: space-between; gap: 0.75rem; }
.toast.success { border-left: 4px solid var(--commodity-green); }
.toast-title { font-weight: 600; margin: 0; }
.toast-description { margin: 0.25rem 0 0; color: #4b5563; font-size: 0.875rem; }
.toast-close { background: none; border: none; cursor: pointer; color: var(--muted); }

.not-found { text-align: center; padding: 6rem 1.5rem; }
.not-found h1 { font-size: 3rem; color: var(--commodity-blue); margin: 0; }
"#;
