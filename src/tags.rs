//! Known documentation tags per language, with snippet templates for their
//! arguments.

use serde::Serialize;

use crate::profile::Language;

/// A known tag and the snippet template that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagTemplate {
    pub tag: &'static str,
    pub template: &'static str,
}

impl TagTemplate {
    /// Tag name followed by its template, as inserted after the tag
    /// introducer.
    pub fn snippet(&self) -> String {
        if self.template.is_empty() {
            self.tag.to_string()
        } else {
            format!("{} {}", self.tag, self.template)
        }
    }
}

/// How a partially typed tag name is matched against a table.
#[derive(Debug, Clone, Copy)]
enum Matching {
    Prefix,
    Substring,
    /// Substring after title-casing each word (`undefined b` ->
    /// `Undefined B`).
    TitleCase,
}

fn table(language: Language) -> (&'static [(&'static str, &'static str)], Matching) {
    match language {
        Language::JavaScript | Language::TypeScript => (JSDOC, Matching::Prefix),
        Language::Php => (PHPDOC, Matching::Substring),
        Language::Java => (JAVADOC, Matching::Substring),
        Language::Cpp => (DOXYGEN, Matching::Substring),
        Language::ObjC => (HEADERDOC, Matching::Substring),
        Language::Ruby => (YARD, Matching::Substring),
        Language::Rust => (RUST_SECTIONS, Matching::TitleCase),
        Language::Swift => (SWIFT_MARKUP, Matching::Substring),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Tags of `language` matching the partially typed `partial`.
///
/// A leading introducer (`@`, `\`, `#` or `-`) is ignored. JSDoc matches by
/// prefix; the other tables match anywhere in the tag name. An empty partial
/// lists the whole table.
pub fn lookup_tags(language: Language, partial: &str) -> Vec<TagTemplate> {
    let typed = partial
        .trim()
        .trim_start_matches(['@', '\\', '#', '-'])
        .trim_start();
    let (tags, matching) = table(language);
    let typed = match matching {
        Matching::TitleCase => title_case(typed),
        Matching::Prefix | Matching::Substring => typed.to_string(),
    };

    tags.iter()
        .filter(|(tag, _)| match matching {
            Matching::Prefix => tag.starts_with(typed.as_str()),
            Matching::Substring | Matching::TitleCase => tag.contains(typed.as_str()),
        })
        .map(|&(tag, template)| TagTemplate { tag, template })
        .collect()
}

const RUST_SECTIONS: &[(&str, &str)] = &[
    ("Aborts", "${0:description}"),
    ("Errors", "${0:description}"),
    ("Examples", "```\n${0:description}\n```"),
    ("Panics", "${0:description}"),
    ("Safety", "${0:description}"),
    ("Undefined Behavior", "${0:description}"),
];

const JSDOC: &[(&str, &str)] = &[
    ("abstract", ""),
    ("access", "${0:package|private|protected|public}"),
    ("alias", "${0:aliasNamepath}"),
    ("async", ""),
    ("author", "${0:name} ${1:email}"),
    ("borrows", "${0:namepath} as ${1:namepath}"),
    ("callback", "${0:namepath}"),
    ("class", "${0:name}"),
    ("classdesc", "${0:description}"),
    ("const", "{${0:type}}"),
    ("constructs", "${0:name}"),
    ("copyright", "${0:copyright}"),
    ("default", "${0:value}"),
    ("deprecated", "${0:description}"),
    ("desc", "${0:description}"),
    ("enum", "{${0:type}}"),
    ("event", "${0:eventName}"),
    ("example", "${0:example}"),
    ("exports", "${0:moduleName}"),
    ("extends", "${0:namepath}"),
    ("external", "${0:name}"),
    ("file", "${0:description}"),
    ("fires", "${0:eventName}"),
    ("function", "${0:functionName}"),
    ("generator", ""),
    ("global", ""),
    ("hideconstructor", ""),
    ("ignore", ""),
    ("implements", "{${0:typeExpression}}"),
    ("inheritdoc", ""),
    ("inner", ""),
    ("instance", ""),
    ("interface", "${0:name}"),
    ("kind", "${0:kindName}"),
    ("lends", "${0:namepath}"),
    ("license", "${0:identifier}"),
    ("listens", "${0:eventName}"),
    ("memberof", "${0:parentNamepath}"),
    ("mixes", "${0:otherObjectPath}"),
    ("mixin", "${0:MixinName}"),
    ("module", "${0:moduleName}"),
    ("name", "${0:namepath}"),
    ("namespace", "${0:name}"),
    ("override", ""),
    ("package", ""),
    ("param", "{${0:type}} ${1:name} - ${2:description}"),
    ("private", ""),
    ("property", "{${0:type}} ${1:name} - ${2:description}"),
    ("protected", ""),
    ("public", ""),
    ("readonly", ""),
    ("requires", "${0:moduleName}"),
    ("returns", "{${0:type}} - ${1:description}"),
    ("see", "${0:namepath}"),
    ("since", "${0:versionDescription}"),
    ("static", ""),
    ("this", "${0:namePath}"),
    ("throws", "{${0:type}} - ${1:description}"),
    ("todo", "${0:description}"),
    ("tutorial", "${0:description}"),
    ("type", "{${0:type}}"),
    ("typedef", "{${0:type}} ${1:namepath}"),
    ("variation", "${0:variationNumber}"),
    ("version", "${0:version}"),
    ("yields", "{${0:type}} - ${1:description}"),
];

const PHPDOC: &[(&str, &str)] = &[
    ("api", ""),
    ("author", "${0:name} ${1:email}"),
    ("deprecated", "${0:version} ${1:description}"),
    ("copyright", "${0:description}"),
    ("example", "${0:example}"),
    ("filesource", ""),
    ("ignore", "${0:description}"),
    ("internal", "${0:description}"),
    ("license", "${0:name}"),
    ("link", "${0:URI} ${1:description}"),
    ("method", "${0:description}"),
    ("package", "${0:description}"),
    ("param", "${0:type} ${1:name} ${2:description}"),
    ("property", "${0:type} ${1:name} ${2:description}"),
    ("return", "${0:type} ${1:description}"),
    ("see", "${0:URI|FQSEN} ${1:description}"),
    ("since", "${0:version} ${1:description}"),
    ("throws", "${0:type} ${1:description}"),
    ("todo", "${0:description}"),
    ("uses", "${0:FQSEN} ${1:description}"),
    ("var", "${0:type}"),
    ("version", "${0:version} ${1:description}"),
];

const JAVADOC: &[(&str, &str)] = &[
    ("author", "${0:name}"),
    ("version", "${0:version}"),
    ("since", "${0:version}"),
    ("see", "${0:reference}"),
    ("serial", ""),
    ("serialField", ""),
    ("param", "${0:name} ${1:description}"),
    ("return", "${0:description}"),
    ("exception", "${0:classname} ${1:description}"),
    ("throws", "${0:classname} ${1:description}"),
    ("deprecated", "${0:description}"),
    ("inheritDoc", ""),
    ("link", "${0:reference}"),
    ("linkPlain", "${0:reference}"),
    ("value", ""),
    ("docRoot", ""),
    ("code", ""),
    ("literal", ""),
];

const DOXYGEN: &[(&str, &str)] = &[
    ("addtogroup", "${0:name} ${1:title}"),
    ("callgraph", ""),
    ("hidecallgraph", ""),
    ("callergraph", ""),
    ("hidecallergraph", ""),
    ("showrefby", ""),
    ("hiderefby", ""),
    ("showrefs", ""),
    ("hiderefs", ""),
    ("class", "${0:name} ${1:header file} ${2:header name}"),
    ("concept", "${0:name}"),
    ("def", "${0:name}"),
    ("defgroup", "${0:name} ${1:group} ${2:title}"),
    ("dir", "${0:path} ${1:fragment}"),
    ("enum", "${0:name}"),
    ("example", "${0:lineno}, ${1:file name}"),
    ("endinternal", ""),
    ("extends", "${0:name}"),
    ("file", "${0:name}"),
    ("fn", ""),
    ("headerfile", "${1:header file} ${2:header name}"),
    ("hideinitializer", ""),
    ("idlexcept", "${0:name}"),
    ("implements", "${0:name}"),
    ("ingroup", "${0:groupname}"),
    ("interface", "${0:name} ${1:header file} ${2:header name}"),
    ("internal", ""),
    ("mainpage", "${0:title}"),
    ("memberof", "${0:name}"),
    ("name", "${0:header}"),
    ("namespace", "${0:name}"),
    ("nosubgrouping", ""),
    ("overload", "${0:function declaration}"),
    ("page", "${0:name} ${1:title}"),
    ("private", ""),
    ("privatesection", ""),
    ("property", ""),
    ("protected", ""),
    ("protectedsection", ""),
    ("protocol", "${0:name} ${1:header file} ${2:header name}"),
    ("public", ""),
    ("publicsection", ""),
    ("pure", ""),
    ("relates", "${0:name}"),
    ("related", "${0:name}"),
    ("relatesalso", "${0:name}"),
    ("relatedalso", "${0:name}"),
    ("showinitializer", ""),
    ("static", ""),
    ("struct", "${0:name} ${1:header file} ${2:header name}"),
    ("typedef", ""),
    ("union", "${0:name} ${1:header file} ${2:header name}"),
    ("var", ""),
    ("weakgroup", "${0:name} ${1:title}"),
    ("author", "${0:author}"),
    ("brief", "${0:description}"),
    ("bug", "${0:description}"),
    ("copyright", "${0:copyright}"),
    ("date", "${0:date}"),
    ("deprecated", "${0:description}"),
    ("details", "${0:description}"),
    ("noop", ""),
    ("raisewarning", ""),
    ("note", "${0:text}"),
    ("param", "${0:name} ${1:description}"),
    ("result", "${0:description}"),
    ("return", "${0:description}"),
    ("retval", "${0:description}"),
    ("see", "${0:references}"),
    ("since", "${0:text}"),
    ("throw", "${0:exception description}"),
    ("throws", "${0:exception description}"),
    ("todo", "${0:text}"),
    ("version", "${0:version}"),
    ("warning", "${0:message}"),
];

const HEADERDOC: &[(&str, &str)] = &[
    ("abstract", "${0:description}"),
    ("apiuid", "${0:description}"),
    ("attribute", ""),
    ("attributelist", ""),
    ("attributeblock", ""),
    ("availability", "${0:description}"),
    ("brief", "${0:description}"),
    ("discussion", "${0:description}"),
    ("indexgroup", "${0:name}"),
    ("internal", ""),
    ("link", "${0:link}"),
    ("namespace", "${0:namespace}"),
    ("see", "${0:link}"),
    ("seealso", "${0:link}"),
    ("updated", "${0:description}"),
    ("frameworkcopyright", "${0:year} ${1:description}"),
    ("frameworkpath", "${0:path}"),
    ("frameworkuid", "${0:UID}"),
    ("headerpath", "${0:path}"),
    ("author", "${0:author}"),
    ("charset", "${0:charset}"),
    ("compilerflag", "${0:flags}"),
    ("copyright", "${0:copyright}"),
    ("CFBundleIdentifier", "${0:bundle}"),
    ("encoding", "${0:charset}"),
    ("flag", "${0:flags}"),
    ("ignore", "${0:description}"),
    ("ignorefuncmacro", "${0:description}"),
    ("preprocinfo", ""),
    ("related", "${0:description}"),
    ("unsorted", ""),
    ("version", "${0:version}"),
    ("whyinclude", "${0:description}"),
    ("classdesign", "${0:description}"),
    ("coclass", "${0:class} ${1:description}"),
    ("dependency", "${0:description}"),
    ("deprecated", "${0:description}"),
    ("helper", "${0:class}"),
    ("helperclass", "${0:class}"),
    ("helps", "${0:description}"),
    ("instancesize", "${0:description}"),
    ("ownership", "${0:description}"),
    ("performance", "${0:description}"),
    ("security", "${0:description}"),
    ("superclass", "${0:class}"),
    ("templatefield", "${0:field} ${1:description}"),
    ("var", "${0:var}"),
    ("param", "${0:name} ${1:description}"),
    ("result", "${0:description}"),
    ("return", "${0:description}"),
    ("throws", "${0:description}"),
    ("callback", "${0:function} ${1:description}"),
    ("field", "${0:field} ${1:description}"),
    ("constant", "${0:name} ${1:description}"),
    ("const", "${0:name} ${1:description}"),
    ("define", "${0:name}"),
    ("defined", "${0:name}"),
    ("noParse", ""),
    ("parseOnly", ""),
];

const YARD: &[(&str, &str)] = &[
    ("abstract", "${0:description}"),
    ("api", "${0:description}"),
    ("author", "${0:description}"),
    ("deprecated", "${0:description}"),
    ("example", ""),
    ("note", "${0:description}"),
    ("option", "[${0:type}] ${1:name} ${2:description}"),
    ("overload", "${0:description}"),
    ("param", "[${0:type}] ${1:name} ${2:description}"),
    ("private", ""),
    ("raise", "[${0:type}] ${1:description}"),
    ("return", "[${0:type}] ${1:description}"),
    ("see", "${0:name} ${1:description}"),
    ("since", "${0:description}"),
    ("todo", "${0:description}"),
    ("version", "${0:description}"),
    ("yield", "[${0:parameters}] ${1:description}"),
    ("yieldparam", "[${0:type}] ${1:name} ${2:description}"),
    ("yieldreturn", "[${0:type}] ${1:description}"),
];

const SWIFT_MARKUP: &[(&str, &str)] = &[
    ("attention", "${0:description}"),
    ("author", "${0:description}"),
    ("authors", "${0:description}"),
    ("bug", "${0:description}"),
    ("complexity", "${0:description}"),
    ("copyright", "${0:description}"),
    ("date", "${0:description}"),
    ("example", "${0:description}"),
    ("experiment", "${0:description}"),
    ("important", "${0:description}"),
    ("invariant", "${0:description}"),
    ("note", "${0:description}"),
    ("parameter", "${0:name} ${1:description}"),
    ("postcondition", "${0:description}"),
    ("precondition", "${0:description}"),
    ("remark", "${0:description}"),
    ("remarks", "${0:description}"),
    ("requires", "${0:description}"),
    ("returns", "${0:description}"),
    ("see", "${0:description}"),
    ("since", "${0:description}"),
    ("throws", "${0:description}"),
    ("todo", "${0:description}"),
    ("version", "${0:description}"),
    ("warning", "${0:description}"),
];
