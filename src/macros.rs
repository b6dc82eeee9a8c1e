/// Define a struct together with its [`Record`](crate::Record) descriptor
/// table and slot dispatch.
///
/// Fields may carry a serialization tag after `=>`; the source key is the tag
/// text before the first `,`, so `omitempty`-style modifiers are ignored.
/// The struct must implement `Default` (derive it) so the decoder can
/// zero-initialize nested instances and sequence elements.
///
/// ```
/// jsonfill::record! {
/// 	#[derive(Debug, Default)]
/// 	pub struct User {
/// 		pub name: String,
/// 		pub age: u32 => "user_age,omitempty",
/// 	}
/// }
///
/// let mut user = User::default();
/// jsonfill::from_str(r#"{"name":"Ann","user_age":30}"#, &mut user).unwrap();
/// assert_eq!(user.age, 30);
/// ```
#[macro_export]
macro_rules! record {
	(@tag $tag:literal) => { ::core::option::Option::Some($tag) };
	(@tag) => { ::core::option::Option::None };
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$fmeta:meta])*
				$fvis:vis $field:ident : $fty:ty $(=> $tag:literal)?
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$fmeta])*
				$fvis $field: $fty,
			)+
		}

		impl $crate::Record for $name {
			fn descriptors(&self) -> &'static [$crate::FieldDescriptor] {
				const DESCRIPTORS: &[$crate::FieldDescriptor] = &[
					$(
						$crate::FieldDescriptor {
							name: ::core::stringify!($field),
							tag: $crate::record!(@tag $($tag)?),
							kind: <$fty as $crate::Slot>::KIND,
						},
					)+
				];
				DESCRIPTORS
			}

			fn field_slot(&mut self, name: &'static str) -> ::core::option::Option<$crate::FieldSlot<'_>> {
				match name {
					$(::core::stringify!($field) => ::core::option::Option::Some($crate::Slot::slot(&mut self.$field)),)+
					_ => ::core::option::Option::None,
				}
			}

			fn reset(&mut self) {
				*self = <Self as ::core::default::Default>::default();
			}
		}

		impl $crate::Slot for $name {
			const KIND: $crate::FieldKind = $crate::FieldKind::Record;

			fn slot(&mut self) -> $crate::FieldSlot<'_> {
				$crate::FieldSlot::Record(self)
			}
		}
	};
}
