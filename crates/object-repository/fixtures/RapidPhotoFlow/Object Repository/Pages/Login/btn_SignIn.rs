<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Sign In button on login page</description>
   <name>btn_SignIn</name>
   <tag></tag>
   <elementGuidId>login-signin-button</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[@type='submit' and contains(text(), 'Sign In')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>button[type='submit']</value>
      </entry>
      <entry>
         <key>BASIC</key>
         <value>//button[contains(text(), 'Sign In')]</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
