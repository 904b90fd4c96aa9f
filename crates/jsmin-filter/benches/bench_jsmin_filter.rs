use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsmin_filter::{FilterConfig, ScriptFilter};

fn generate_html(scripts: usize) -> String {
    let mut doc = String::from("<html>\n<head><title>bench</title></head>\n<body>\n");
    for i in 0..scripts {
        doc.push_str(&format!(
            "<p>Paragraph {i} with   some  text.</p>\n<script>\n  // block {i}\n  var v{i} = {i} + 1;\n  if (v{i} > 2) {{ console.log('v{i}'); }}\n</script>\n"
        ));
    }
    doc.push_str("</body>\n</html>\n");
    doc
}

fn bench_process_html(c: &mut Criterion) {
    let filter = ScriptFilter::allow_all();
    let doc = generate_html(200).into_bytes();
    c.bench_function("process_html_200_scripts", |b| {
        b.iter(|| black_box(filter.process(Some("text/html"), black_box(doc.clone()))))
    });
}

fn bench_path_policy(c: &mut Criterion) {
    let filter = ScriptFilter::new(&FilterConfig::include("/static/*,*.min.js,/vendor/*/dist/*")).unwrap();
    c.bench_function("path_policy_match", |b| {
        b.iter(|| black_box(filter.applies_to(black_box("/vendor/lib/dist/lib.js"))))
    });
}

criterion_group!(benches, bench_process_html, bench_path_policy);
criterion_main!(benches);
