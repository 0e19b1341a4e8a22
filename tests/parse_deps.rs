//! End-to-end extraction over whole template documents.

use pretty_assertions::assert_eq;

use phtml_deps::parse;

fn no_strings() -> Vec<String> {
    Vec::new()
}

#[test]
fn document_without_declarations_yields_nothing() {
    let result = parse("<html><body><div class='x'>text</div><script>var a = 1;</script></body></html>");
    assert_eq!(result.dependencies, no_strings());
    assert_eq!(result.warnings, no_strings());
}

#[test]
fn inline_attribute_declaration() {
    let result = parse(r#"<div data-mage-init='{"Module/Name": {}}'></div>"#);
    assert_eq!(result.dependencies, vec!["Module/Name"]);
    assert_eq!(result.warnings, no_strings());
}

#[test]
fn invalid_inline_attribute_becomes_a_verbatim_warning() {
    let result = parse("<div data-mage-init='{not: valid:: json}'></div>");
    assert_eq!(result.dependencies, no_strings());
    assert_eq!(result.warnings, vec!["{not: valid:: json}"]);
}

#[test]
fn data_bind_mage_init_directive() {
    let result =
        parse(r#"<div data-bind="mageInit: {'Module/A': {}}, click: doSomething"></div>"#);
    assert_eq!(result.dependencies, vec!["Module/A"]);
    assert_eq!(result.warnings, no_strings());
}

#[test]
fn data_bind_without_mage_init_is_ignored_entirely() {
    let result = parse(r#"<div data-bind="click: doSomething, text: label"></div>"#);
    assert_eq!(result.dependencies, no_strings());
    assert_eq!(result.warnings, no_strings());
}

#[test]
fn init_script_declaration_keeps_document_order() {
    let result = parse(
        r#"<script type="text/x-magento-init">{"*": {"Module/A": {}, "Module/B": {}}}</script>"#,
    );
    assert_eq!(result.dependencies, vec!["Module/A", "Module/B"]);
    assert_eq!(result.warnings, no_strings());
}

#[test]
fn malformed_init_script_becomes_a_verbatim_warning() {
    let result = parse(r#"<script type="text/x-magento-init">{"*": oops(}</script>"#);
    assert_eq!(result.dependencies, no_strings());
    assert_eq!(result.warnings, vec![r#"{"*": oops(}"#]);
}

#[test]
fn ordinary_script_bodies_are_not_inspected() {
    let result = parse(r#"<script>{"*": {"Module/A": {}}}</script>"#);
    assert_eq!(result.dependencies, no_strings());
    assert_eq!(result.warnings, no_strings());
}

#[test]
fn script_tag_name_matches_case_insensitively() {
    let result =
        parse(r#"<SCRIPT type="text/x-magento-init">{"*": {"Module/A": {}}}</SCRIPT>"#);
    assert_eq!(result.dependencies, vec!["Module/A"]);
}

#[test]
fn php_span_with_quote_does_not_corrupt_later_attributes() {
    let document = r#"
        <div data-mage-init='<?= "it's" ?>'></div>
        <span data-mage-init='{"Module/Ok": {}}'></span>
    "#;
    let result = parse(document);
    assert_eq!(result.dependencies, vec!["Module/Ok"]);
    assert_eq!(result.warnings, vec!["PHP_DELIMITER"]);
}

#[test]
fn both_attribute_kinds_fire_on_the_same_node() {
    let document = r#"<div
        data-mage-init='{"Module/Inline": {}}'
        data-bind="mageInit: {'Module/Bound': {}}"></div>"#;
    let result = parse(document);
    assert_eq!(result.dependencies, vec!["Module/Inline", "Module/Bound"]);
    assert_eq!(result.warnings, no_strings());
}

#[test]
fn one_bad_declaration_does_not_suppress_its_siblings() {
    let document = r##"
        <div data-mage-init='{"Module/First": {}}'></div>
        <div data-mage-init='{broken'></div>
        <script type="text/x-magento-init">{"#main": {"Module/Last": {}}}</script>
    "##;
    let result = parse(document);
    assert_eq!(result.dependencies, vec!["Module/First", "Module/Last"]);
    assert_eq!(result.warnings, vec!["{broken"]);
}

#[test]
fn dependencies_follow_document_order_across_sources() {
    let document = r#"
        <div data-mage-init='{"Module/A": {}}'></div>
        <script type="text/x-magento-init">{"*": {"Module/B": {}}}</script>
        <div data-bind="mageInit: {'Module/C': {}}"></div>
    "#;
    let result = parse(document);
    assert_eq!(result.dependencies, vec!["Module/A", "Module/B", "Module/C"]);
}

#[test]
fn parse_is_idempotent() {
    let document = r#"
        <div data-mage-init='{"Module/A": {}, bad'></div>
        <script type="text/x-magento-init">{"*": {"Module/B": {}}}</script>
    "#;
    assert_eq!(parse(document), parse(document));
}

#[test]
fn multiline_init_script_inside_a_real_template() {
    let document = r##"
        <?php /** @var $block \Magento\Framework\View\Element\Template */ ?>
        <div id="cart" data-bind="mageInit: {'Magento_Checkout/js/sidebar': {}}">
            <?= $block->getChildHtml('minicart.content') ?>
        </div>
        <script type="text/x-magento-init">
        {
            "#cart": {
                "Magento_Checkout/js/view/minicart": {"shoppingCartUrl": "/checkout/cart"}
            },
            "*": {
                "Magento_Customer/js/customer-data": {}
            }
        }
        </script>
    "##;
    let result = parse(document);
    assert_eq!(
        result.dependencies,
        vec![
            "Magento_Checkout/js/sidebar",
            "Magento_Checkout/js/view/minicart",
            "Magento_Customer/js/customer-data",
        ]
    );
    assert_eq!(result.warnings, no_strings());
}
