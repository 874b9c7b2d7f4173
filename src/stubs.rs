/// Built-in PHP class stubs.
///
/// Classes and interfaces that ship with the PHP runtime have no source
/// file and no descriptor of their own, yet documented code refers to
/// them all the time (`@return \FilesystemIterator`, `implements
/// \Countable`).  This module lists the common ones so the class index can
/// recognise them as *native* classes: a function returning one of them is
/// flagged as returning a native class, and a parameter typed with one
/// exposes it through `ParamEntity::native_class_type`.
///
/// The stubs carry no methods.  An `@inheritDoc` that can only be answered
/// by a built-in interface therefore still fails, exactly as it would for
/// any other undocumented ancestor.
use crate::types::ClassDescriptor;

/// `(name, is_interface)` pairs of the built-in classes known by default.
pub const BUILTIN_CLASSES: &[(&str, bool)] = &[
    ("ArrayAccess", true),
    ("ArrayIterator", false),
    ("ArrayObject", false),
    ("BackedEnum", true),
    ("Closure", false),
    ("Countable", true),
    ("DateInterval", false),
    ("DatePeriod", false),
    ("DateTime", false),
    ("DateTimeImmutable", false),
    ("DateTimeInterface", true),
    ("DateTimeZone", false),
    ("DirectoryIterator", false),
    ("DOMDocument", false),
    ("DOMElement", false),
    ("DomainException", false),
    ("Error", false),
    ("ErrorException", false),
    ("Exception", false),
    ("FilesystemIterator", false),
    ("Generator", false),
    ("InvalidArgumentException", false),
    ("Iterator", true),
    ("IteratorAggregate", true),
    ("JsonSerializable", true),
    ("LogicException", false),
    ("OutOfBoundsException", false),
    ("PDO", false),
    ("PDOStatement", false),
    ("RecursiveDirectoryIterator", false),
    ("RecursiveIteratorIterator", false),
    ("ReflectionClass", false),
    ("ReflectionMethod", false),
    ("Reflector", true),
    ("RuntimeException", false),
    ("SimpleXMLElement", false),
    ("SplFileInfo", false),
    ("SplFileObject", false),
    ("SplObjectStorage", false),
    ("SplStack", false),
    ("Stringable", true),
    ("Throwable", true),
    ("Traversable", true),
    ("TypeError", false),
    ("UnexpectedValueException", false),
    ("UnitEnum", true),
    ("ValueError", false),
    ("stdClass", false),
];

/// Build the stub descriptor for a built-in class.
pub fn builtin_descriptor(name: &str, is_interface: bool) -> ClassDescriptor {
    let mut descriptor = ClassDescriptor::named(name);
    descriptor.is_builtin = true;
    descriptor.is_interface = is_interface;
    descriptor
}

/// Descriptors for every entry of [`BUILTIN_CLASSES`].
pub fn builtin_descriptors() -> impl Iterator<Item = ClassDescriptor> {
    BUILTIN_CLASSES
        .iter()
        .map(|&(name, is_interface)| builtin_descriptor(name, is_interface))
}
