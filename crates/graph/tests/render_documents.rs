//! End-to-end rendering over small graphs

use graphdoc_graph::{
    merge_graphs, render_documents, EntityKind, IndexedGraph, MetaValue, RenderConfig,
    RenderedDocument,
};
use graphdoc_protocol::{Graph, Node, Relationship};
use pretty_assertions::assert_eq;

fn indexed(nodes: Vec<Node>, rels: Vec<Relationship>) -> IndexedGraph {
    IndexedGraph::build(merge_graphs([Graph::new(nodes, rels)]))
}

fn render_with(graph: &IndexedGraph, config: &RenderConfig, node_id: &str) -> RenderedDocument {
    render_documents(graph, config)
        .into_iter()
        .find(|doc| doc.node_id == node_id)
        .unwrap_or_else(|| panic!("no document for {node_id}"))
}

fn render(graph: &IndexedGraph, node_id: &str) -> RenderedDocument {
    render_with(graph, &RenderConfig::default(), node_id)
}

fn file(id: &str, path: &str) -> Node {
    Node::new(id, "File").with_property("path", path)
}

fn function(id: &str, name: &str) -> Node {
    Node::new(id, "Function").with_property("name", name)
}

#[test]
fn file_links_dependencies_and_functions() {
    let graph = indexed(
        vec![
            file("F1", "src/a.ts"),
            file("F2", "src/b.ts").with_property("name", "b.ts"),
            function("fn1", "run"),
        ],
        vec![
            Relationship::new("IMPORTS", "F1", "F2"),
            Relationship::new("DEFINES_FUNCTION", "F1", "fn1"),
        ],
    );

    let doc = render(&graph, "F1");
    assert_eq!(doc.slug, "file-src-a-ts");
    assert_eq!(doc.kind, EntityKind::File);
    assert_eq!(doc.section_titles(), vec!["Functions", "Dependencies"]);
    assert_eq!(
        doc.section("Dependencies").unwrap().items,
        vec![r#"<a href="/file-src-b-ts.html">b.ts</a>"#]
    );
    assert_eq!(
        doc.section("Functions").unwrap().items,
        vec![r#"<a href="/fn-run.html">run()</a>"#]
    );
    assert_eq!(doc.metadata.get_number("import_count"), Some(1));
    assert_eq!(doc.metadata.get_number("function_count"), Some(1));
    assert_eq!(doc.metadata.get_text("file_name"), Some("a.ts"));
    assert_eq!(doc.metadata.get_text("directory"), Some("src"));
    assert_eq!(doc.metadata.get_text("extension"), Some(".ts"));
    assert_eq!(
        doc.metadata.get("tags"),
        Some(&MetaValue::List(vec!["File".to_string()]))
    );

    let markdown = doc.to_markdown();
    assert!(markdown.starts_with("---\ntitle: \"a.ts | repository Source File\"\n"));
    assert!(markdown.contains("\nimport_count: 1\n"));
    assert!(markdown.contains("## Dependencies\n\n- <a href=\"/file-src-b-ts.html\">b.ts</a>\n\n"));
    assert!(markdown.contains("## FAQs\n\n### What does a.ts do?\n\n"));
}

#[test]
fn front_matter_key_order_for_functions() {
    let graph = indexed(
        vec![
            file("f1", "src/auth/login.ts").with_property("language", "typescript"),
            function("fn1", "login")
                .with_property("filePath", "src/auth/login.ts")
                .with_property("language", "typescript")
                .with_property("startLine", 10)
                .with_property("endLine", 24),
        ],
        vec![Relationship::new("DEFINES_FUNCTION", "f1", "fn1")],
    );

    let doc = render(&graph, "fn1");
    assert_eq!(doc.slug, "fn-login-ts-login");
    assert_eq!(
        doc.metadata.keys(),
        vec![
            "title",
            "description",
            "node_type",
            "function_name",
            "file_path",
            "directory",
            "language",
            "start_line",
            "end_line",
            "line_count",
            "repo",
            "call_count",
            "called_by_count",
            "tags",
            "graph_data",
            "mermaid_diagram",
            "arch_map",
        ]
    );
    assert_eq!(doc.metadata.get_number("line_count"), Some(15));
    assert_eq!(
        doc.metadata.get_text("description"),
        Some("Architecture documentation for the login() function in login.ts from the repository codebase.")
    );
}

#[test]
fn faq_block_requires_two_questions() {
    let graph = indexed(
        vec![
            Node::new("t1", "Type").with_property("name", "Loose"),
            Node::new("t2", "Type").with_property("name", "Anchored"),
            file("f1", "src/types.ts"),
        ],
        vec![Relationship::new("DEFINES", "f1", "t2")],
    );

    let loose = render(&graph, "t1");
    assert!(loose.faqs.is_empty());
    assert!(!loose.to_markdown().contains("## FAQs"));

    let anchored = render(&graph, "t2");
    let questions: Vec<&str> = anchored.faqs.iter().map(|f| f.question.as_str()).collect();
    assert_eq!(
        questions,
        vec!["What is the Anchored type?", "Where is Anchored defined?"]
    );
    assert_eq!(anchored.faqs[1].answer, "Anchored is defined in src/types.ts.");
}

#[test]
fn long_faq_lists_are_truncated() {
    let mut nodes = vec![file("f1", "src/big.ts")];
    let mut rels = Vec::new();
    for i in 0..12 {
        let id = format!("fn{i:02}");
        nodes.push(function(&id, &format!("f{i:02}")));
        rels.push(Relationship::new("DEFINES_FUNCTION", "f1", id));
    }
    let graph = indexed(nodes, rels);

    let doc = render(&graph, "f1");
    let answer = &doc
        .faqs
        .iter()
        .find(|f| f.question == "What functions are defined in big.ts?")
        .unwrap()
        .answer;
    assert_eq!(
        answer,
        "big.ts defines 12 function(s): f00, f01, f02, f03, f04, f05, f06, f07, f08, f09, and 2 more."
    );
    assert!(matches!(doc.metadata.get("tags"), Some(MetaValue::List(tags)) if tags.contains(&"Complex".to_string())));
}

#[test]
fn sections_sort_by_display_name_and_dangling_edges_degrade() {
    let graph = indexed(
        vec![
            file("f1", "src/a.ts"),
            function("z", "zeta"),
            function("a", "alpha"),
            function("m", "Mid"),
        ],
        vec![
            Relationship::new("DEFINES_FUNCTION", "f1", "z"),
            Relationship::new("DEFINES_FUNCTION", "f1", "a"),
            Relationship::new("DEFINES_FUNCTION", "f1", "m"),
            Relationship::new("IMPORTS", "f1", "ghost<1>"),
        ],
    );

    let doc = render(&graph, "f1");
    assert_eq!(
        doc.section("Functions").unwrap().items,
        vec![
            r#"<a href="/fn-mid.html">Mid()</a>"#,
            r#"<a href="/fn-alpha.html">alpha()</a>"#,
            r#"<a href="/fn-zeta.html">zeta()</a>"#,
        ]
    );
    assert_eq!(doc.section("Dependencies").unwrap().items, vec!["ghost&lt;1&gt;"]);
}

#[test]
fn ownership_drives_sections_and_arch_map() {
    let graph = indexed(
        vec![
            Node::new("d1", "Domain").with_property("name", "Auth"),
            Node::new("s1", "Subdomain").with_property("name", "Tokens"),
            file("f1", "src/auth/token.ts"),
            function("fn1", "issue").with_property("filePath", "src/auth/token.ts"),
        ],
        vec![
            Relationship::new("partOf", "s1", "d1"),
            Relationship::new("DEFINES_FUNCTION", "f1", "fn1"),
            Relationship::new("belongsTo", "fn1", "s1"),
        ],
    );

    let file_doc = render(&graph, "f1");
    assert_eq!(file_doc.metadata.get_text("domain"), Some("Auth"));
    assert_eq!(file_doc.metadata.get_text("subdomain"), Some("Tokens"));
    assert_eq!(
        file_doc.section_titles(),
        vec!["Domain", "Subdomains", "Functions"]
    );
    assert_eq!(
        file_doc.section("Domain").unwrap().items,
        vec![r#"<a href="/domain-auth.html">Auth</a>"#]
    );

    let fn_doc = render(&graph, "fn1");
    assert_eq!(
        fn_doc.metadata.get_text("arch_map"),
        Some(
            r#"{"domain":{"name":"Auth","slug":"domain-auth"},"entity":{"name":"issue","slug":"fn-token-ts-issue","type":"Function"},"file":{"name":"f1","slug":"file-src-auth-token-ts"},"subdomain":{"name":"Tokens","slug":"subdomain-tokens"}}"#
        )
    );

    let domain_doc = render(&graph, "d1");
    assert_eq!(domain_doc.metadata.get_number("file_count"), Some(1));
    assert_eq!(domain_doc.section_titles(), vec!["Subdomains", "Source Files"]);
    assert_eq!(
        domain_doc.section("Source Files").unwrap().items,
        vec![r#"<a href="/file-src-auth-token-ts.html">src/auth/token.ts</a>"#]
    );

    let sub_doc = render(&graph, "s1");
    assert_eq!(sub_doc.metadata.get_text("domain"), Some("Auth"));
    assert_eq!(
        sub_doc.section_titles(),
        vec!["Domain", "Functions", "Source Files"]
    );
    assert_eq!(
        sub_doc.faqs[1].answer,
        "Tokens belongs to the Auth domain."
    );
}

#[test]
fn source_links_use_repository_url_and_branch() {
    let graph = indexed(
        vec![function("fn1", "run")
            .with_property("filePath", "src/a.ts")
            .with_property("startLine", 12)],
        vec![],
    );
    let config = RenderConfig {
        repo_name: "shop".to_string(),
        repo_url: "https://github.com/acme/shop".to_string(),
        branch: "develop".to_string(),
        ..RenderConfig::default()
    };

    let doc = render_with(&graph, &config, "fn1");
    assert_eq!(
        doc.section("Source").unwrap().items,
        vec![r#"<a href="https://github.com/acme/shop/blob/develop/src/a.ts#L12">View source</a>"#]
    );
    assert_eq!(
        doc.metadata.get_text("title"),
        Some("run() | shop Function Reference")
    );
}

#[test]
fn graph_data_respects_neighborhood_cap() {
    let mut nodes = vec![file("hub", "src/hub.ts")];
    let mut rels = Vec::new();
    for i in 0..45 {
        let id = format!("leaf{i}");
        nodes.push(file(&id, &format!("src/leaf{i}.ts")));
        rels.push(Relationship::new("IMPORTS", id, "hub"));
    }
    let graph = indexed(nodes, rels);

    let doc = render(&graph, "hub");
    let data: serde_json::Value =
        serde_json::from_str(doc.metadata.get_text("graph_data").unwrap()).unwrap();
    assert_eq!(data["nodes"].as_array().unwrap().len(), 31);
    assert_eq!(data["edges"][0]["source"], "leaf0");
    assert_eq!(data["edges"][0]["target"], "hub");

    let leaf = render(&graph, "leaf3");
    let data: serde_json::Value =
        serde_json::from_str(leaf.metadata.get_text("graph_data").unwrap()).unwrap();
    assert_eq!(data["nodes"].as_array().unwrap().len(), 2);
}

#[test]
fn isolated_entities_omit_exports() {
    let graph = indexed(vec![file("f1", "solo.rs")], vec![]);

    let doc = render(&graph, "f1");
    assert_eq!(doc.metadata.get("graph_data"), None);
    assert_eq!(doc.metadata.get("mermaid_diagram"), None);
    assert_eq!(doc.metadata.get("arch_map"), None);
    assert_eq!(doc.metadata.get("directory"), None);
    assert!(matches!(doc.metadata.get("tags"), Some(MetaValue::List(tags)) if tags.contains(&"Isolated".to_string())));
}

#[test]
fn documents_follow_slug_order_and_skip_unrenderable_nodes() {
    let graph = indexed(
        vec![
            Node::new("root", "Directory").with_property("path", "/app/repo-root/"),
            Node::new("d1", "Directory").with_property("path", "src"),
            Node::new("m1", "Module").with_property("name", "ignored"),
            Node::new("f0", "File"),
            file("f1", "src/a.ts"),
        ],
        vec![
            Relationship::new("CHILD_DIRECTORY", "root", "d1"),
            Relationship::new("CONTAINS_FILE", "d1", "f1"),
        ],
    );

    let docs = render_documents(&graph, &RenderConfig::default());
    let slugs: Vec<&str> = docs.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["dir-src", "file-src-a-ts"]);

    let dir = &docs[0];
    assert_eq!(dir.metadata.get_text("dir_name"), Some("src"));
    assert_eq!(dir.metadata.get_text("top_directory"), Some("src"));
    assert_eq!(dir.section_titles(), vec!["Files"]);
    // Only the contents question applies, which is below the FAQ threshold.
    assert!(dir.faqs.is_empty());
}

#[test]
fn out_of_range_line_numbers_saturate() {
    let graph = indexed(
        vec![
            function("fn1", "run").with_property("endLine", 1e30),
            function("fn2", "walk")
                .with_property("startLine", -1e30)
                .with_property("endLine", 10),
        ],
        vec![],
    );

    let run = render(&graph, "fn1");
    assert_eq!(run.metadata.get_number("end_line"), Some(i64::MAX));
    assert_eq!(run.metadata.get_number("line_count"), Some(i64::MAX));
    assert_eq!(run.metadata.get_number("start_line"), None);

    let walk = render(&graph, "fn2");
    assert_eq!(walk.metadata.get_number("line_count"), Some(i64::MAX));
}

#[test]
fn directory_lists_subdirectories_by_path() {
    let graph = indexed(
        vec![
            Node::new("d1", "Directory").with_property("path", "src"),
            Node::new("d2", "Directory")
                .with_property("path", "src/auth")
                .with_property("name", "auth"),
            Node::new("d3", "Directory")
                .with_property("path", "src/api")
                .with_property("name", "api"),
            file("f1", "src/main.rs").with_property("name", "main.rs"),
        ],
        vec![
            Relationship::new("CHILD_DIRECTORY", "d1", "d2"),
            Relationship::new("CHILD_DIRECTORY", "d1", "d3"),
            Relationship::new("CONTAINS_FILE", "d1", "f1"),
        ],
    );

    let doc = render(&graph, "d1");
    assert_eq!(doc.section_titles(), vec!["Subdirectories", "Files"]);
    assert_eq!(
        doc.section("Subdirectories").unwrap().items,
        vec![
            r#"<a href="/dir-src-api.html">src/api/</a>"#,
            r#"<a href="/dir-src-auth.html">src/auth/</a>"#,
        ]
    );
    assert_eq!(
        doc.section("Files").unwrap().items,
        vec![r#"<a href="/file-src-main-rs.html">main.rs</a>"#]
    );
    assert_eq!(doc.metadata.get_number("subdir_count"), Some(2));
    assert_eq!(doc.faqs.len(), 2);
    assert_eq!(doc.faqs[1].question, "What subdirectories does src/ contain?");
    assert_eq!(doc.faqs[1].answer, "src/ contains 2 subdirectory(ies): api, auth.");
}

#[test]
fn function_call_sections_are_sorted_with_parentheses() {
    let graph = indexed(
        vec![
            function("fn1", "run"),
            function("fn2", "zed"),
            function("fn3", "beta"),
            function("fn4", "main"),
        ],
        vec![
            Relationship::new("calls", "fn1", "fn2"),
            Relationship::new("calls", "fn1", "fn3"),
            Relationship::new("calls", "fn4", "fn1"),
        ],
    );

    let doc = render(&graph, "fn1");
    assert_eq!(doc.section_titles(), vec!["Calls", "Called By"]);
    assert_eq!(
        doc.section("Calls").unwrap().items,
        vec![
            r#"<a href="/fn-beta.html">beta()</a>"#,
            r#"<a href="/fn-zed.html">zed()</a>"#,
        ]
    );
    assert_eq!(
        doc.section("Called By").unwrap().items,
        vec![r#"<a href="/fn-main.html">main()</a>"#]
    );
    assert_eq!(doc.metadata.get_number("call_count"), Some(2));
    assert_eq!(doc.metadata.get_number("called_by_count"), Some(1));
}

#[test]
fn imported_by_labels_use_the_importer_path() {
    let graph = indexed(
        vec![
            file("F1", "src/a.ts"),
            file("F2", "src/b.ts").with_property("name", "b.ts"),
        ],
        vec![Relationship::new("IMPORTS", "F2", "F1")],
    );

    let doc = render(&graph, "F1");
    assert_eq!(doc.section_titles(), vec!["Imported By"]);
    assert_eq!(
        doc.section("Imported By").unwrap().items,
        vec![r#"<a href="/file-src-b-ts.html">src/b.ts</a>"#]
    );
}

fn named(id: String, label: &str, name: String) -> Node {
    Node::new(id, label).with_property("name", name)
}

fn answer<'a>(doc: &'a RenderedDocument, question: &str) -> &'a str {
    doc.faqs
        .iter()
        .find(|f| f.question == question)
        .map(|f| f.answer.as_str())
        .unwrap_or_else(|| panic!("no FAQ {question:?} in {}", doc.slug))
}

#[test]
fn eight_entry_lists_are_truncated() {
    let mut nodes = vec![file("hub-file", "src/hub.ts"), function("hub", "hub")];
    let mut rels = Vec::new();
    for i in 0..10 {
        nodes.push(named(format!("dep{i}"), "File", format!("d{i:02}")));
        rels.push(Relationship::new("IMPORTS", "hub-file", format!("dep{i}")));
        nodes.push(named(format!("caller{i}"), "Function", format!("k{i:02}")));
        rels.push(Relationship::new("calls", format!("caller{i}"), "hub"));
    }
    nodes.push(named("s1".to_string(), "Subdomain", "Tokens".to_string()));
    for i in 0..9 {
        nodes.push(named(format!("importer{i}"), "File", format!("i{i:02}")));
        rels.push(Relationship::new("IMPORTS", format!("importer{i}"), "hub-file"));
        nodes.push(named(format!("callee{i}"), "Function", format!("c{i:02}")));
        rels.push(Relationship::new("calls", "hub", format!("callee{i}")));
        nodes.push(named(format!("member{i}"), "Function", format!("t{i:02}")));
        rels.push(Relationship::new("belongsTo", format!("member{i}"), "s1"));
    }
    let graph = indexed(nodes, rels);

    let file_doc = render(&graph, "hub-file");
    assert_eq!(
        answer(&file_doc, "What does hub.ts depend on?"),
        "hub.ts imports 10 module(s): d00, d01, d02, d03, d04, d05, d06, d07, and 2 more."
    );
    assert_eq!(
        answer(&file_doc, "What files import hub.ts?"),
        "hub.ts is imported by 9 file(s): i00, i01, i02, i03, i04, i05, i06, i07, and 1 more."
    );

    let fn_doc = render(&graph, "hub");
    assert_eq!(
        answer(&fn_doc, "What does hub() call?"),
        "hub() calls 9 function(s): c00, c01, c02, c03, c04, c05, c06, c07, and 1 more."
    );
    assert_eq!(
        answer(&fn_doc, "What calls hub()?"),
        "hub() is called by 10 function(s): k00, k01, k02, k03, k04, k05, k06, k07, and 2 more."
    );

    let sub_doc = render(&graph, "s1");
    assert_eq!(
        answer(&sub_doc, "What functions are in Tokens?"),
        "The Tokens subdomain contains 9 function(s): t00, t01, t02, t03, t04, t05, t06, t07, and 1 more."
    );
}

#[test]
fn domain_lists_subdomains_and_subdomain_lists_classes() {
    let graph = indexed(
        vec![
            Node::new("d1", "Domain").with_property("name", "Auth"),
            Node::new("s1", "Subdomain").with_property("name", "Tokens"),
            Node::new("s2", "Subdomain").with_property("name", "Sessions"),
            Node::new("c1", "Class").with_property("name", "Issuer"),
            Node::new("c2", "Class").with_property("name", "Cache"),
        ],
        vec![
            Relationship::new("partOf", "s1", "d1"),
            Relationship::new("partOf", "s2", "d1"),
            Relationship::new("belongsTo", "c1", "s1"),
            Relationship::new("belongsTo", "c2", "s1"),
        ],
    );

    let domain = render(&graph, "d1");
    assert_eq!(domain.section_titles(), vec!["Subdomains"]);
    assert_eq!(
        domain.section("Subdomains").unwrap().items,
        vec![
            r#"<a href="/subdomain-sessions.html">Sessions</a>"#,
            r#"<a href="/subdomain-tokens.html">Tokens</a>"#,
        ]
    );

    let sub = render(&graph, "s1");
    assert_eq!(sub.section_titles(), vec!["Domain", "Classes"]);
    assert_eq!(
        sub.section("Domain").unwrap().items,
        vec![r#"<a href="/domain-auth.html">Auth</a>"#]
    );
    assert_eq!(
        sub.section("Classes").unwrap().items,
        vec![
            r#"<a href="/class-cache.html">Cache</a>"#,
            r#"<a href="/class-issuer.html">Issuer</a>"#,
        ]
    );
}
