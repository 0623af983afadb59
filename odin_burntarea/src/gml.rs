/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! a minimal namespace resolved XML element tree for GML documents, and the member walk that
//! turns a WFS GetFeature response into burnt area features

use quick_xml::{
    events::{BytesStart, Event},
    name::{Namespace, ResolveResult},
    NsReader
};
use tracing::{debug, warn};

use crate::{BurntAreaFeature, GmlNamespaces, feature::extract_feature, errors::{parse_error, Result}};

/// namespace URI (if bound) and local name of an element or attribute
#[derive(Debug,Clone,PartialEq)]
pub struct XmlName {
    pub ns: Option<String>,
    pub local: String,
}

impl XmlName {
    pub fn is (&self, ns: &str, local: &str)->bool {
        self.local == local && self.ns.as_deref() == Some(ns)
    }
}

#[derive(Debug,Clone)]
pub struct XmlElement {
    pub name: XmlName,
    pub attrs: Vec<(XmlName,String)>,
    pub text: String, // concatenated (unescaped) text and CDATA content of this element, without children
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn is (&self, ns: &str, local: &str)->bool {
        self.name.is( ns, local)
    }

    pub fn attr (&self, ns: &str, local: &str)->Option<&str> {
        self.attrs.iter().find( |(name,_)| name.is(ns,local)).map( |(_,v)| v.as_str())
    }

    /// all elements below self in document order (self not included)
    pub fn descendants (&self)->Descendants<'_> {
        Descendants { stack: self.children.iter().rev().collect() }
    }

    pub fn find_descendant (&self, ns: &str, local: &str)->Option<&XmlElement> {
        self.descendants().find( |e| e.is(ns,local))
    }

    pub fn find_all_descendants<'a> (&'a self, ns: &'a str, local: &'a str)->impl Iterator<Item=&'a XmlElement> + 'a {
        self.descendants().filter( move |e| e.is(ns,local))
    }

    /// text of the first matching descendant. Note this is Some("") for empty elements
    pub fn descendant_text (&self, ns: &str, local: &str)->Option<&str> {
        self.find_descendant( ns, local).map( |e| e.text.as_str())
    }
}

/// depth first pre-order traversal
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next (&mut self)->Option<Self::Item> {
        let e = self.stack.pop()?;
        self.stack.extend( e.children.iter().rev());
        Some(e)
    }
}

/// parse a complete XML document into its root element.
/// Returns an error for ill-formed input (syntax errors, mismatched or unclosed tags, unbound prefixes, no or several roots)
pub fn parse_gml (text: &str)->Result<XmlElement> {
    let mut reader = NsReader::from_str(text);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let (res, event) = reader.read_resolved_event()?;
        let ns = namespace_uri( res)?;

        match event {
            Event::Start(ref e) => {
                let elem = new_element( &reader, ns, e)?;
                stack.push( elem);
            }
            Event::Empty(ref e) => {
                let elem = new_element( &reader, ns, e)?;
                close_element( &mut stack, &mut root, elem)?;
            }
            Event::End(_) => {
                let elem = stack.pop().ok_or_else( || parse_error!("unbalanced end tag at {}", reader.buffer_position()))?;
                close_element( &mut stack, &mut root, elem)?;
            }
            Event::Text(ref t) => {
                if let Some(top) = stack.last_mut() {
                    let s = t.unescape().map_err( |e| parse_error!("invalid text: {e}"))?;
                    top.text.push_str( &s);
                }
            }
            Event::CData(c) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str( &String::from_utf8_lossy( &c.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {} // declarations, comments, processing instructions, doctype
        }
    }

    if let Some(open) = stack.last() {
        return Err( parse_error!("unclosed element '{}'", open.name.local))
    }
    root.ok_or_else( || parse_error!("no root element"))
}

fn namespace_uri (res: ResolveResult)->Result<Option<String>> {
    match res {
        ResolveResult::Bound(Namespace(uri)) => Ok( Some( String::from_utf8_lossy(uri).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err( parse_error!("unbound namespace prefix '{}'", String::from_utf8_lossy(&prefix)))
    }
}

fn new_element (reader: &NsReader<&[u8]>, ns: Option<String>, e: &BytesStart)->Result<XmlElement> {
    let local = String::from_utf8_lossy( e.local_name().as_ref()).into_owned();
    let mut attrs = Vec::new();

    for attr in e.attributes() {
        let attr = attr.map_err( |e| parse_error!("invalid attribute: {e}"))?;
        if attr.key.as_namespace_binding().is_some() { continue } // xmlns declarations are already resolved

        let (res, attr_local) = reader.resolve_attribute( attr.key);
        let attr_ns = namespace_uri( res)?;
        let name = XmlName { ns: attr_ns, local: String::from_utf8_lossy( attr_local.as_ref()).into_owned() };
        let value = attr.unescape_value().map_err( |e| parse_error!("invalid attribute value: {e}"))?;
        attrs.push( (name, value.into_owned()) );
    }

    Ok( XmlElement { name: XmlName { ns, local }, attrs, text: String::new(), children: Vec::new() } )
}

fn close_element (stack: &mut Vec<XmlElement>, root: &mut Option<XmlElement>, elem: XmlElement)->Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push( elem);
        Ok(())
    } else if root.is_none() {
        *root = Some(elem);
        Ok(())
    } else {
        Err( parse_error!("more than one root element ('{}')", elem.name.local))
    }
}

/// extract all burnt area features of a given season year from a WFS GetFeature (GML 3.2) response.
/// Each `wfs:member` contributes at most one feature (its first `ba:burnt_area_<year>` element). Members without such 
/// element are ignored, features that fail extraction are logged and skipped.
/// Returns an error only if the document itself is not well-formed
pub fn parse_burnt_areas (gml: &str, year: i32, element_name: &str, ns: &GmlNamespaces)->Result<Vec<BurntAreaFeature>> {
    let root = parse_gml( gml)?;
    let mut features = Vec::new();
    let mut n_members = 0;

    for member in root.find_all_descendants( &ns.wfs, "member") {
        n_members += 1;
        if let Some(elem) = member.find_descendant( &ns.ba, element_name) {
            match extract_feature( elem, year, ns) {
                Ok(feature) => features.push( feature),
                Err(reason) => warn!("skipping burnt area {:?}: {}", elem.attr( &ns.gml, "id").unwrap_or(""), reason)
            }
        }
    }

    debug!("{} of {} members converted into {} features", features.len(), n_members, element_name);
    Ok(features)
}
