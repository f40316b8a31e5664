// Copyright (c) 2023-2024, The BitcoinMW Developers
// Some code and concepts from:
// * Grin: https://github.com/mimblewimble/grin
// * Arti: https://gitlab.torproject.org/tpo/core/arti
// * BitcoinMW: https://github.com/bitcoinmw/bitcoinmw
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Build a [`crate::Config`] from a comma separated list of [`crate::ConfigOption`] values.
#[macro_export]
macro_rules! config {
	( $( $config:expr ),* ) => {{
		use $crate::{ConfigBuilder, ConfigOption, ConfigOption::*};
		let mut config_values: Vec<ConfigOption> = vec![];
		$(
			config_values.push($config);
		)*

		ConfigBuilder::build_config(config_values)
	}};
}
